pub mod collate;
