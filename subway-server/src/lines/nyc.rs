//! Built-in NYC subway line tables.
//!
//! Hand-curated stop sequences, north to south, matching the bundled
//! station dataset. Express services are flattened onto the local
//! sequence (the A express would skip stations; the linear model cannot
//! say so).

use super::topology::LineTopology;

/// The built-in A/C/G/L line tables.
pub fn subway_lines() -> LineTopology {
    LineTopology::builder()
        // A from Inwood-207 St to Ozone Park-Lefferts Blvd
        .line(
            "A",
            &[
                "A02", "A03", "A05", "A06", "A07", "A09", "A10", "A11", "A12", "A14", "A15",
                "A16", "A17", "A18", "A19", "A20", "A21", "A22", "A24", "A25", "A27", "A28",
                "A30", "A31", "A32", "A33", "A34", "A36", "A38", "A40", "A41", "A42", "A43",
                "A44", "A45", "A46", "A47", "A48", "A49", "A50", "A51", "A52", "A53", "A54",
                "A55", "A57", "A59", "A60", "A61", "A63", "A64", "A65",
            ],
        )
        // C from 168 St to Euclid Av
        .line(
            "C",
            &[
                "A09", "A10", "A11", "A12", "A14", "A15", "A16", "A17", "A18", "A19", "A20",
                "A21", "A22", "A24", "A25", "A27", "A28", "A30", "A31", "A32", "A33", "A34",
                "A36", "A38", "A40", "A41", "A42", "A43", "A44", "A45", "A46", "A47", "A48",
                "A49", "A50", "A51", "A52", "A53", "A54", "A55",
            ],
        )
        // G from Court Sq to Church Av
        .line(
            "G",
            &[
                "G22", "G24", "G26", "G28", "G29", "G30", "G31", "G32", "G33", "G34", "G35",
                "G36", "A42", "F20", "F21", "F22", "F23", "F24", "F25", "F26", "F27",
            ],
        )
        // L from 8 Av to Canarsie-Rockaway Pkwy
        .line(
            "L",
            &[
                "L01", "L02", "L03", "L05", "L06", "L08", "L10", "L11", "L12", "L13", "L14",
                "L15", "L16", "L17", "L19", "L20", "L21", "L22", "L24", "L25", "L26", "L27",
                "L28", "L29",
            ],
        )
        .build()
        .expect("built-in line tables contain only valid stop ids")
}
