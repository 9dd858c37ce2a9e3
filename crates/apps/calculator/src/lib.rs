//! Calculator desktop app: a keypad UI over the pure [`engine::CalcEngine`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod engine;

use leptos::*;
use webdesk_contract::AppMountContext;
use webdesk_ui::prelude::*;

pub use engine::{CalcEngine, Operator};

#[component]
/// Calculator window contents. All state is window-local and discarded when
/// the hosting window closes.
pub fn CalculatorApp(
    /// Mount context from the hosting window.
    ctx: AppMountContext,
) -> impl IntoView {
    let engine = create_rw_signal(CalcEngine::default());

    view! {
        <AppShell layout_class="app-calculator" window_attr=ctx.window_attr()>
            <div class="calc-display" role="status" aria-label="Calculator display">
                {move || engine.with(|e| e.display().to_string())}
            </div>

            <div class="calc-keypad">
                <Button
                    variant=ButtonVariant::Danger
                    size=ButtonSize::Lg
                    layout_class="span-2"
                    on_click=Callback::new(move |_| engine.update(CalcEngine::clear))
                >
                    "Clear"
                </Button>
                <OperatorKey engine=engine operator=Operator::Divide />
                <OperatorKey engine=engine operator=Operator::Multiply />

                <DigitKey engine=engine digit='7' />
                <DigitKey engine=engine digit='8' />
                <DigitKey engine=engine digit='9' />
                <OperatorKey engine=engine operator=Operator::Subtract />

                <DigitKey engine=engine digit='4' />
                <DigitKey engine=engine digit='5' />
                <DigitKey engine=engine digit='6' />
                <OperatorKey engine=engine operator=Operator::Add />

                <DigitKey engine=engine digit='1' />
                <DigitKey engine=engine digit='2' />
                <DigitKey engine=engine digit='3' />
                <Button
                    variant=ButtonVariant::Primary
                    size=ButtonSize::Lg
                    layout_class="row-span-2"
                    on_click=Callback::new(move |_| engine.update(CalcEngine::evaluate))
                >
                    "="
                </Button>

                <DigitKey engine=engine digit='0' layout_class="span-2" />
                <DigitKey engine=engine digit='.' />
            </div>
        </AppShell>
    }
}

#[component]
fn DigitKey(
    engine: RwSignal<CalcEngine>,
    digit: char,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <Button
            size=ButtonSize::Lg
            layout_class=layout_class.unwrap_or("")
            on_click=Callback::new(move |_| engine.update(|e| e.push_digit(digit)))
        >
            {digit.to_string()}
        </Button>
    }
}

#[component]
fn OperatorKey(engine: RwSignal<CalcEngine>, operator: Operator) -> impl IntoView {
    view! {
        <Button
            variant=ButtonVariant::Accent
            size=ButtonSize::Lg
            on_click=Callback::new(move |_| engine.update(|e| e.input_operator(operator)))
        >
            {operator.symbol()}
        </Button>
    }
}
