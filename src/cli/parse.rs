use maze_core::format::OutputFormat;
use maze_core::frontier::Discipline;

/// Parse frontier discipline from string
pub fn parse_discipline(s: &str) -> std::result::Result<Discipline, String> {
    s.parse::<Discipline>().map_err(|e| e.to_string())
}

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
