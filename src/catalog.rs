//! Known macros and how the dashboard renders them.
//!
//! Pure data. Stored profiles are never checked against this table.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MacroStyle {
    Red,
    Blue,
    Green,
    Yellow,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MacroSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub image: &'static str,
    pub style: MacroStyle,
}

const fn spec(
    key: &'static str,
    label: &'static str,
    image: &'static str,
    style: MacroStyle,
) -> MacroSpec {
    MacroSpec {
        key,
        label,
        image,
        style,
    }
}

#[rustfmt::skip]
pub const MACROS: &[MacroSpec] = &[
    spec("Reinforce", "Reinforce", "redeploy.webp", MacroStyle::Yellow),
    spec("Resupply", "Resupply", "resupply.webp", MacroStyle::Blue),
    spec("SOS Beacon", "SOS Beacon", "sos.webp", MacroStyle::Yellow),
    spec("Hellbomb", "Hellbomb", "hellbomb.webp", MacroStyle::Yellow),
    spec("SEAF Artillery", "SEAF Artillery", "seaf_artillery.webp", MacroStyle::Yellow),
    spec("Eagle Airstrike", "Eagle Airstrike", "eagle_airstrike.webp", MacroStyle::Red),
    spec("Eagle 500kg", "Eagle 500KG Bomb", "eagle_500kg.webp", MacroStyle::Red),
    spec("Eagle Cluster", "Eagle Cluster Bomb", "eagle_cluster.webp", MacroStyle::Red),
    spec("Eagle Napalm", "Eagle Napalm Airstrike", "eagle_napalm.webp", MacroStyle::Red),
    spec("Eagle Strafing", "Eagle Strafing Run", "eagle_strafing.webp", MacroStyle::Red),
    spec("Orbital Laser", "Orbital Laser", "orbital_laser.webp", MacroStyle::Red),
    spec("Orbital Railcannon", "Orbital Railcannon Strike", "orbital_railcannon.webp", MacroStyle::Red),
    spec("Orbital Precision", "Orbital Precision Strike", "orbital_precision.webp", MacroStyle::Red),
    spec("Orbital 380mm", "Orbital 380MM HE Barrage", "orbital_380mm.webp", MacroStyle::Red),
    spec("Orbital Gas", "Orbital Gas Strike", "orbital_gas.webp", MacroStyle::Red),
    spec("Autocannon", "Autocannon", "autocannon.webp", MacroStyle::Blue),
    spec("Quasar Cannon", "Quasar Cannon", "quasar_cannon.webp", MacroStyle::Blue),
    spec("Recoilless Rifle", "Recoilless Rifle", "recoilless_rifle.webp", MacroStyle::Blue),
    spec("Machine Gun", "Machine Gun", "machine_gun.webp", MacroStyle::Blue),
    spec("Jump Pack", "Jump Pack", "jump_pack.webp", MacroStyle::Blue),
    spec("Shield Generator", "Shield Generator Pack", "shield_pack.webp", MacroStyle::Blue),
    spec("Gatling Sentry", "Gatling Sentry", "gatling_sentry.webp", MacroStyle::Green),
    spec("Autocannon Sentry", "Autocannon Sentry", "autocannon_sentry.webp", MacroStyle::Green),
    spec("Rocket Sentry", "Rocket Sentry", "rocket_sentry.webp", MacroStyle::Green),
    spec("Anti-Personnel Minefield", "Anti-Personnel Minefield", "minefield.webp", MacroStyle::Green),
    spec("Shield Relay", "Shield Generator Relay", "shield_relay.webp", MacroStyle::Green),
];

pub fn lookup(key: &str) -> Option<&'static MacroSpec> {
    MACROS.iter().find(|spec| spec.key == key)
}

/// Image stem (file name without `.webp`) for a key. Unknown keys fall back
/// to their lowercased form.
pub fn icon_for(key: &str) -> String {
    lookup(key)
        .map(|spec| spec.image.trim_end_matches(".webp").to_string())
        .unwrap_or_else(|| key.to_lowercase())
}

/// Reverse of [`icon_for`] for catalog entries.
pub fn key_for_icon(icon: &str) -> Option<&'static str> {
    let stem = icon.trim_end_matches(".webp");
    MACROS
        .iter()
        .find(|spec| spec.image.trim_end_matches(".webp") == stem)
        .map(|spec| spec.key)
}
