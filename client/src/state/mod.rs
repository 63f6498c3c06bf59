//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Entity panels keep their state in `rbac::PanelState`, provided through
//! context as `RwSignal<PanelState<Users>>` and `RwSignal<PanelState<Roles>>`.
//! Only presentation concerns that belong to neither panel live here.

pub mod ui;
