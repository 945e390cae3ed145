//! Static catalogs used across harnesses.

use super::builders::SoftwareBuilder;
use vjdir_core::{OperatingSystem, PricingModel, Software};

use OperatingSystem::{Linux, MacOs, Windows};

/// The two-record catalog from the TouchDesigner / Hydra scenario.
pub fn scenario_catalog() -> Vec<Software> {
    vec![
        SoftwareBuilder::new(1, "TouchDesigner")
            .description("Node-based visual programming language for real-time interactive multimedia content.")
            .os(&[Windows, MacOs])
            .pricing(PricingModel::Freemium)
            .features(&["MIDI", "OSC"])
            .build(),
        SoftwareBuilder::new(2, "Hydra")
            .description("Live coding environment for creating visuals with JavaScript, running directly in the browser.")
            .os(&[Windows, MacOs, Linux])
            .pricing(PricingModel::Free)
            .features(&["JavaScript", "OSC"])
            .build(),
    ]
}

/// A slightly larger hand-written catalog with every pricing model and an
/// entry that has no platforms at all.
pub fn mixed_catalog() -> Vec<Software> {
    vec![
        SoftwareBuilder::new(1, "Resolume Arena")
            .description("Professional VJ software for live performances")
            .os(&[Windows, MacOs])
            .pricing(PricingModel::Paid)
            .features(&["Video Mapping", "MIDI", "OSC"])
            .build(),
        SoftwareBuilder::new(2, "Processing")
            .description("Creative coding environment")
            .os(&[Windows, MacOs, Linux])
            .pricing(PricingModel::Free)
            .features(&["Creative Coding", "Open Source"])
            .build(),
        SoftwareBuilder::new(3, "Max/MSP/Jitter")
            .description("Visual programming for music and multimedia")
            .os(&[Windows, MacOs])
            .pricing(PricingModel::Subscription)
            .features(&["Visual Programming", "MIDI"])
            .build(),
        SoftwareBuilder::new(4, "Kodelife")
            .description("GPU shader editor for live coding")
            .os(&[Windows, MacOs, Linux])
            .pricing(PricingModel::Freemium)
            .features(&["Live Coding", "GLSL Shaders", "OSC"])
            .build(),
        SoftwareBuilder::new(5, "Prototype Rig")
            .description("Unreleased in-house tool")
            .os(&[])
            .pricing(PricingModel::Free)
            .features(&[])
            .build(),
    ]
}

/// Feature vocabulary used by generated catalogs.
pub const FEATURES: &[&str] = &["MIDI", "OSC", "NDI", "Spout", "Syphon", "DMX", "GLSL Shaders"];
