//! WASM bindings for Netsketch Core.
//!
//! Plain functions over netlist text; results cross the boundary as strings
//! (SVG markup or JSON) and errors as their display message.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { draw_svg, draw_plan, check } from 'netsketch_core';
//!
//! await init();
//!
//! const netlist = `
//!   V1 1 0 10V
//!   R1 1 2 100
//!   R2 1 2 200
//!   R3 2 0 300
//! `;
//!
//! document.getElementById('schematic').innerHTML = draw_svg(netlist, 3);
//! const plan = JSON.parse(draw_plan(netlist, 3));
//! ```

use serde_json::json;
use wasm_bindgen::prelude::*;

use crate::error::NetsketchError;
use crate::layout::{render_svg, LayoutConfig};
use crate::schematic::{check_netlist, draw_schematic, Schematic};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(err: NetsketchError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn schematic(netlist: &str, max_per_row: usize) -> Result<Schematic, JsValue> {
    let config = LayoutConfig::new().with_max_per_row(max_per_row);
    draw_schematic(netlist, &config).map_err(to_js)
}

/// Draw a netlist as an SVG document.
///
/// # Arguments
/// * `netlist` - Netlist text
/// * `max_per_row` - Groups per row before wrapping (3 is the CLI default)
#[wasm_bindgen]
pub fn draw_svg(netlist: &str, max_per_row: usize) -> Result<String, JsValue> {
    let schematic = schematic(netlist, max_per_row)?;
    render_svg(&schematic.layout).map_err(|e| to_js(e.into()))
}

/// Run the full pipeline and return the schematic as JSON.
#[wasm_bindgen]
pub fn draw_plan(netlist: &str, max_per_row: usize) -> Result<String, JsValue> {
    let schematic = schematic(netlist, max_per_row)?;
    serde_json::to_string(&schematic).map_err(|e| to_js(e.into()))
}

/// Parse and validate only, returning `{ components, skipped_lines, errors, warnings }` as JSON.
#[wasm_bindgen]
pub fn check(netlist: &str) -> Result<String, JsValue> {
    let (parsed, report) = check_netlist(netlist).map_err(to_js)?;
    let value = json!({
        "components": parsed.components,
        "skipped_lines": parsed.skipped_lines,
        "errors": report.errors,
        "warnings": report.warnings,
    });
    Ok(value.to_string())
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
