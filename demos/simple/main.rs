use std::sync::Arc;

use clickstream_core::{
    EventBatch, HealthEventConfig, InterceptedEvent, InterceptorRegistry, SharedInterceptor,
};

pub fn main() {
    env_logger::init();

    // Install a debugging observer before the pipeline first asks for the interceptor.
    let registry = InterceptorRegistry::global();
    registry.install(|| {
        Arc::new(|events: &EventBatch| {
            for event in events.events() {
                println!(
                    "intercepted {} ({}, {} bytes)",
                    event.uuid,
                    event.event_name,
                    event.payload_size()
                );
            }
        }) as SharedInterceptor
    });

    // The transport pipeline would package prepared events like this around send.
    let batch = EventBatch::new(vec![
        InterceptedEvent::new("5a1f...", "checkout_started", vec![0; 48]),
        InterceptedEvent::new("8c2d...", "checkout_completed", vec![0; 112]),
    ]);
    registry.get_instance().on_intercept(&batch);

    // Health-event gating from remote config.
    let config = HealthEventConfig::from_json(
        r#"{
            "minTrackedVersion": "4.37.0",
            "randomUserIdRemainder": [2, 5],
            "destination": ["CT"],
            "verbosityLevel": "minimum"
        }"#,
    )
    .unwrap();

    println!(
        "user 12345 on 4.38.1 eligible: {}",
        config.is_eligible("4.38.1", 12345)
    );
    println!(
        "batch-sent forced through primary channel: {}",
        config.is_routed_to_primary_channel("Clickstream Batch Sent")
    );
}
