pub mod stock_link;
