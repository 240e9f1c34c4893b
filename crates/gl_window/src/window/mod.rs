//! Window management subsystem
//!
//! ```text
//! ┌─────────────────────────────────┐
//! │     Application Code            │
//! └─────────────┬───────────────────┘
//!               │ Uses
//!         ┌─────▼─────┐
//!         │  Window   │ ← Façade (facade.rs)
//!         └─────┬─────┘
//!               │ Uses
//!   ┌───────────▼───────────┐
//!   │ WindowLibrary         │ ← Library contract (backend.rs)
//!   │ WindowBackend         │
//!   └───────────┬───────────┘
//!               │ Implemented by
//!   ┌───────────▼───────────┐
//!   │ GlfwLibrary           │ ← GLFW (glfw_backend.rs)
//!   │ GlfwWindow            │
//!   └───────────────────────┘
//! ```

pub mod backend;
pub mod error;
pub mod facade;
pub mod glfw_backend;

pub use backend::{BufferSize, CursorMode, VideoMode, WindowBackend, WindowLibrary};
pub use error::{WindowError, WindowResult};
pub use facade::Window;
pub use glfw_backend::{GlfwLibrary, GlfwWindow};
