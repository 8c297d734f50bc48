pub mod d100_inventory;

pub use d100_inventory::ui::InventoryDashboard;
