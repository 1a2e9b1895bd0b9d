//! Schematic symbol selection.

use serde::Serialize;

use crate::components::Component;

/// Symbol a renderer should draw for a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    VoltageSource,
    Resistor,
    Capacitor,
    Inductor,
    Diode,
    Zener,
    NpnBjt,
    NFet,
    OpAmp,
    /// Generic IC drawn as a labelled box
    IcBox,
}

impl SymbolKind {
    /// Pick the symbol for `component`.
    ///
    /// Diode and IC symbols look at the model name; unknown parts fall back
    /// to a resistor.
    pub fn for_component(component: &Component) -> Self {
        match component {
            Component::VoltageSource(_) => SymbolKind::VoltageSource,
            Component::Resistor(_) => SymbolKind::Resistor,
            Component::Capacitor(_) => SymbolKind::Capacitor,
            Component::Inductor(_) => SymbolKind::Inductor,
            Component::Diode(d) => {
                if d.value.to_lowercase().contains("zener") {
                    SymbolKind::Zener
                } else {
                    SymbolKind::Diode
                }
            }
            Component::Bjt(_) => SymbolKind::NpnBjt,
            Component::Mosfet(_) => SymbolKind::NFet,
            Component::IntegratedCircuit(u) => {
                if u.is_opamp() {
                    SymbolKind::OpAmp
                } else {
                    SymbolKind::IcBox
                }
            }
            Component::Other { .. } => SymbolKind::Resistor,
        }
    }

    /// Short tag for text output.
    pub fn tag(&self) -> &'static str {
        match self {
            SymbolKind::VoltageSource => "V",
            SymbolKind::Resistor => "R",
            SymbolKind::Capacitor => "C",
            SymbolKind::Inductor => "L",
            SymbolKind::Diode => "D",
            SymbolKind::Zener => "Z",
            SymbolKind::NpnBjt => "Q",
            SymbolKind::NFet => "M",
            SymbolKind::OpAmp => "OP",
            SymbolKind::IcBox => "IC",
        }
    }
}
