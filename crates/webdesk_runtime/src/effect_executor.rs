//! Runtime effect-queue executor for reducer-emitted side effects.

use leptos::*;

use crate::runtime_context::DesktopRuntimeContext;

/// Installs the executor that drains reducer-emitted runtime effects in
/// order.
pub fn install(runtime: DesktopRuntimeContext) {
    // The queue is cleared before processing so any effects enqueued by a
    // nested dispatch land in a fresh batch instead of being lost to the
    // in-flight drain.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            runtime.host.get_value().run_runtime_effect(effect);
        }
    });
}
