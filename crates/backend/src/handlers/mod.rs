pub mod d100_inventory;
