pub mod config;
pub mod directory;
pub mod engine;
pub mod kiosk;
pub mod log;
pub mod policy;
pub mod session_store;

pub use directory::Directory;
pub use engine::{AttendanceEngine, ResetSummary, resolve_identity};
pub use kiosk::{AdminCommand, Kiosk, KioskInput, Presenter};
pub use policy::AttendancePolicy;
pub use session_store::{SessionError, SessionSnapshot, SessionStore};
