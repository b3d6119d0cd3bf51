/// Resolves a symbolic icon name to a renderable glyph. Unknown names fall
/// back to the default glyph so callers never deal with a missing icon.
pub fn resolve(name: &str) -> &'static str {
    match name {
        "Sun" => "☀️",
        "Moon" => "🌙",
        "Briefcase" => "💼",
        "Building" => "🏢",
        "User" => "👤",
        "Search" => "🔍",
        "Sparkles" => "✨",
        "Refresh" => "🔄",
        "MapPin" => "📍",
        "Calendar" => "📅",
        "DollarSign" => "💲",
        "Check" => "✔️",
        "CheckCircle" => "✅",
        "CheckSquare" => "☑️",
        "X" => "✖️",
        "Bookmark" => "🔖",
        "Heart" => "❤️",
        "Party" => "🎉",
        "Warning" => "⚠️",
        "Cross" => "❌",
        "Upload" => "📤",
        "FileText" => "📄",
        "Mail" => "✉️",
        "Clock" => "🕐",
        "Home" => "🏠",
        "AlertTriangle" => "🚨",
        "ArrowLeft" => "⬅️",
        "ChevronLeft" => "◀",
        "ChevronRight" => "▶",
        "Star" => "⭐",
        "Filter" => "🔽",
        "Trash2" => "🗑️",
        _ => DEFAULT_GLYPH,
    }
}

pub const DEFAULT_GLYPH: &str = "🙂";
