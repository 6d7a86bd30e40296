mod date;
mod quote;
mod ticker;
mod ticker_list;

pub use date::{DateRange, TradingDate};
pub use quote::{group_by_ticker, QuoteRow, TickerSeries};
pub use ticker::Ticker;
pub use ticker_list::TickerList;
