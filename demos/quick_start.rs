//! Example: mapping errors at an API boundary
//!
//! Run with `APP_ENV=development cargo run --example quick_start` to see the
//! verbose development output, or without it for production defaults.

use error_mapper::mapping::{by_code, for_type};
use error_mapper::prelude::*;
use serde_json::json;

#[derive(Debug)]
enum OrderError {
    NotFound { order_id: u64 },
    AlreadyShipped,
}

impl std::fmt::Display for OrderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderError::NotFound { order_id } => write!(f, "order {} not found", order_id),
            OrderError::AlreadyShipped => f.write_str("order already shipped"),
        }
    }
}

impl_thrown!(OrderError, code = |e| match e {
    OrderError::NotFound { .. } => Some("ORDER_NOT_FOUND".to_string()),
    OrderError::AlreadyShipped => Some("ORDER_SHIPPED".to_string()),
});

fn main() {
    let mapper = ErrorMapperBuilder::from_process_env()
        .register_mapping(for_type(|e: &OrderError| match e {
            OrderError::NotFound { order_id } => {
                ErrorOutput::new("Order not found").with_field("orderId", *order_id)
            },
            OrderError::AlreadyShipped => ErrorOutput::new("Order can no longer be changed"),
        }))
        .register_mapping(by_code("E_RATE_LIMIT", |_| ErrorOutput::new("Too many requests")))
        .on_unknown_error(|err| eprintln!("unmapped error: {:?}", err))
        .build();

    println!("options: {:?}", mapper.options());

    let failures: Vec<Box<dyn Thrown>> = vec![
        Box::new(OrderError::NotFound { order_id: 17 }),
        Box::new(OrderError::AlreadyShipped),
        Box::new(json!({ "message": "slow down", "code": "E_RATE_LIMIT" })),
        Box::new(CaughtError::new("pool timed out after 30s").with_code("E_POOL")),
        Box::new(String::from("a thrown string")),
    ];

    for failure in &failures {
        let output = mapper.map(failure.as_ref());
        match serde_json::to_string(&output) {
            Ok(body) => println!("{}", body),
            Err(e) => eprintln!("Failed to serialize error output: {}", e),
        }
    }
}
