// ABOUTME: UI components for the TUI including medicine list, form, toasts, and help

pub mod add_medicine;
pub mod help;
pub mod layout;
pub mod medicine_list;
pub mod toasts;

pub use add_medicine::AddMedicineComponent;
pub use help::HelpComponent;
pub use layout::LayoutComponent;
pub use medicine_list::MedicineListComponent;
pub use toasts::ToastsComponent;
