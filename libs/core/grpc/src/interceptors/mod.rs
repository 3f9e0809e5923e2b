pub mod client;

pub use client::ClientTracingInterceptor;
