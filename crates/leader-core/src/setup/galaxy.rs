//! Galaxy Setup
//!
//! Creates the planets of the demo galaxy and their connections.

use galaxy_types::{Planet, PlanetRegistry};

/// Create all planets and register them
pub fn create_galaxy() -> PlanetRegistry {
    let mut registry = PlanetRegistry::new();

    // Core worlds, densely connected
    registry.register(Planet::new("Aurelia").with_connections(vec![
        "Brannoc".into(),
        "Cindral".into(),
        "Halcyon".into(),
    ]));
    registry.register(Planet::new("Brannoc").with_connections(vec![
        "Aurelia".into(),
        "Cindral".into(),
        "Dunmere".into(),
    ]));
    registry.register(Planet::new("Cindral").with_connections(vec![
        "Aurelia".into(),
        "Brannoc".into(),
        "Eswyn".into(),
    ]));

    // Frontier worlds
    registry.register(Planet::new("Dunmere").with_connections(vec![
        "Brannoc".into(),
        "Falrow".into(),
    ]));
    registry.register(Planet::new("Eswyn").with_connections(vec![
        "Cindral".into(),
        "Gethsar".into(),
    ]));
    registry.register(Planet::new("Falrow").with_connections(vec![
        "Dunmere".into(),
        "Gethsar".into(),
    ]));
    registry.register(Planet::new("Gethsar").with_connections(vec![
        "Eswyn".into(),
        "Falrow".into(),
        "Halcyon".into(),
    ]));
    registry.register(Planet::new("Halcyon").with_connections(vec![
        "Aurelia".into(),
        "Gethsar".into(),
    ]));

    registry
}
