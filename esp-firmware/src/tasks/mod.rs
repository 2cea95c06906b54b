// Task-Modul: Enthält den Embassy Task des Bring-up Tests
//
// Es gibt genau einen Task, die Checks laufen strikt nacheinander.

pub mod bringup;

// Re-export Tasks für einfachen Import
pub use bringup::{BringupPeripherals, bringup_task};
