/// A parsed line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    ClearSearch,
    Filter(String),
    Sidebar(String),
    Reset,
    List,
    Categories,
    Help,
    Quit,
    Blank,
    Unknown(String),
}

/// Parses one input line. Only the line terminator is stripped: everything
/// after `search ` is the query, surrounding whitespace included.
pub fn parse_command(line: &str) -> Command {
    let line = line.trim_end_matches(['\n', '\r']).trim_start();
    let (word, rest) = match line.split_once(' ') {
        Some((word, rest)) => (word, Some(rest)),
        None => (line, None),
    };

    match word {
        "search" => Command::Search(rest.unwrap_or_default().to_string()),
        "filter" => Command::Filter(rest.unwrap_or_default().trim().to_string()),
        "sidebar" => Command::Sidebar(rest.unwrap_or_default().trim().to_string()),
        "clear-search" => Command::ClearSearch,
        "reset" => Command::Reset,
        "list" => Command::List,
        "categories" => Command::Categories,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        "" => Command::Blank,
        _ => Command::Unknown(line.trim_end().to_string()),
    }
}
