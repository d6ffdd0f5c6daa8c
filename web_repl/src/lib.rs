use infix_calc::{evaluate_with, Options};
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub struct State {
    options: Options,
}

#[wasm_bindgen]
pub fn setup(lenient: bool) -> State {
    console_error_panic_hook::set_once();

    State {
        options: if lenient {
            Options::lenient()
        } else {
            Options::default()
        },
    }
}

/// Returns the answer, or the error message, ready to show on the page.
#[wasm_bindgen]
pub fn run(code: &str, state: &State) -> String {
    match evaluate_with(code, &state.options) {
        Ok(answer) => format!("Answer: {answer}"),
        Err(error) => error.to_string(),
    }
}
