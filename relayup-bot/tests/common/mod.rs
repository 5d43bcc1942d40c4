pub mod mock_bot;
pub mod sources;
