pub mod refresh_token;
