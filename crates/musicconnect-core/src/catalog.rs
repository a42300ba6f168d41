//! Platform catalogs: genres, venue types and Brazilian states.

use serde::Serialize;

/// Music genres offered on the platform.
pub const MUSIC_GENRES: &[&str] = &[
    // Brazilian
    "MPB",
    "Sertanejo",
    "Samba",
    "Pagode",
    "Forró",
    "Bossa Nova",
    "Funk Brasileiro",
    "Axé",
    "Frevo",
    "Baião",
    "Piseiro",
    "Arrocha",
    "Xote",
    // International
    "Rock",
    "Pop",
    "Jazz",
    "Blues",
    "Reggae",
    "Eletrônica",
    "Hip Hop",
    "Trap",
    "R&B",
    "Soul",
    "Country",
    "Folk",
    "Indie",
    "Metal",
    "Punk",
    "Clássica",
    // Other
    "Acústico",
    "Instrumental",
    "Cover",
    "Outros",
];

/// Kinds of venue that can book musicians.
pub const VENUE_TYPES: &[&str] = &[
    "Bar",
    "Restaurante",
    "Casa de Shows",
    "Clube",
    "Teatro",
    "Espaço de Eventos",
    "Hotel",
    "Café",
    "Lounge",
    "Festival",
    "Evento Corporativo",
    "Casamento",
    "Festa Privada",
    "Outros",
];

/// A Brazilian federative unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BrazilianState {
    /// Two-letter code (UF).
    pub code: &'static str,
    pub name: &'static str,
}

const fn uf(code: &'static str, name: &'static str) -> BrazilianState {
    BrazilianState { code, name }
}

/// All 26 states plus the Federal District.
pub const BRAZILIAN_STATES: &[BrazilianState] = &[
    uf("AC", "Acre"),
    uf("AL", "Alagoas"),
    uf("AP", "Amapá"),
    uf("AM", "Amazonas"),
    uf("BA", "Bahia"),
    uf("CE", "Ceará"),
    uf("DF", "Distrito Federal"),
    uf("ES", "Espírito Santo"),
    uf("GO", "Goiás"),
    uf("MA", "Maranhão"),
    uf("MT", "Mato Grosso"),
    uf("MS", "Mato Grosso do Sul"),
    uf("MG", "Minas Gerais"),
    uf("PA", "Pará"),
    uf("PB", "Paraíba"),
    uf("PR", "Paraná"),
    uf("PE", "Pernambuco"),
    uf("PI", "Piauí"),
    uf("RJ", "Rio de Janeiro"),
    uf("RN", "Rio Grande do Norte"),
    uf("RS", "Rio Grande do Sul"),
    uf("RO", "Rondônia"),
    uf("RR", "Roraima"),
    uf("SC", "Santa Catarina"),
    uf("SP", "São Paulo"),
    uf("SE", "Sergipe"),
    uf("TO", "Tocantins"),
];

/// Check if `name` is one of [`MUSIC_GENRES`] (exact match).
pub fn is_music_genre(name: &str) -> bool {
    MUSIC_GENRES.contains(&name)
}

/// Check if `name` is one of [`VENUE_TYPES`] (exact match).
pub fn is_venue_type(name: &str) -> bool {
    VENUE_TYPES.contains(&name)
}

/// Look up a state by its two-letter code, ignoring case.
pub fn state_by_code(code: &str) -> Option<&'static BrazilianState> {
    BRAZILIAN_STATES
        .iter()
        .find(|s| s.code.eq_ignore_ascii_case(code.trim()))
}
