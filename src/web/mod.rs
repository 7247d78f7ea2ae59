//! Web server for browser-based food lookup.
//!
//! This module provides a small web interface using Axum. The page at `/`
//! is a plain HTML form that calls the JSON API below.
//!
//! ## Starting the Server
//!
//! ```text
//! # Start on default port 8080
//! food-resolver serve
//!
//! # Custom port and auto-open browser
//! food-resolver serve --port 3000 --open
//!
//! # Bind to all interfaces
//! food-resolver serve --address 0.0.0.0
//! ```
//!
//! ## API Endpoints
//!
//! - `GET /` - Main page
//! - `GET /api/search?q=ragi` - Full information for every match
//! - `GET /api/category/{name}` - Foods in a category
//! - `POST /api/compare` - Nutrition comparison, body `{"foods": ["Ragi", "Wheat"]}`
//! - `POST /api/labels` - Retail labels, same body as compare
//! - `GET /api/meals?preference=diabetic` - Meal suggestions
//! - `GET /api/catalog` - The keyed catalog export

pub mod server;
