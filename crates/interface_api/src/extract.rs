//! Request extractors whose rejections render as [`ApiError`]
//!
//! Axum's own `Json` and `Path` reject with a plain-text body. These wrap them
//! so malformed payloads and identifiers come back in the usual
//! `{ "error", "message" }` shape.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::ApiError;

/// JSON request body
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Path parameters
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);
