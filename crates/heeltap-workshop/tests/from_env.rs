//! Environment wiring of the workshop. Kept in its own test binary since it
//! mutates process environment variables.

use heeltap_advisor::{AdviceState, NOT_CONFIGURED_MESSAGE};
use heeltap_core::Tool;
use heeltap_workshop::Workshop;

#[tokio::test]
async fn from_env_without_key_gives_an_unconfigured_workshop() {
    heeltap_workshop::init_tracing_from_env();
    for var in ["GEMINI_API_KEY", "API_KEY", "HEELTAP_ADVICE_ENDPOINT"] {
        std::env::remove_var(var);
    }

    let mut workshop = Workshop::from_env().unwrap();
    assert_eq!(workshop.advice(), &AdviceState::NotAsked);

    workshop.toggle_view();
    for tool in Tool::ALL {
        workshop.select_tool(tool);
        let strikes = if tool == Tool::Hammer { 5 } else { 1 };
        for _ in 0..strikes {
            workshop.interact();
        }
        workshop.return_tool();
    }

    workshop.ask_for_advice().await.unwrap();
    assert_eq!(
        workshop.advice().display_text(),
        Some(NOT_CONFIGURED_MESSAGE)
    );
}
