pub mod api_response;
pub mod leaderboard;
pub mod portfolios;
pub mod stocks;
pub mod users;
