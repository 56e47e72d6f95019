//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;

use axum::Router;
use estaciones_web::domain::{Station, StationDraft, StationId};

/// Serve `app` on an ephemeral local port and return its address.
pub async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// An address nothing is listening on.
pub async fn closed_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

pub fn station(id: u64, name: &str) -> Station {
    Station::new(
        StationId::new(id),
        StationDraft {
            name: name.to_string(),
            day: Some(12),
            month: Some(5),
            year: Some(2024),
            latitude: 6.259,
            longitude: -75.591,
        },
    )
}
