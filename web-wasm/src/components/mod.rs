pub mod sidebar;
pub mod layout;
pub mod status_badge;
pub mod customer_table;
pub mod loading;
pub mod toast;
pub mod reference_table;
