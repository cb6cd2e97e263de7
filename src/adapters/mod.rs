pub mod gitgrade_adapter;
