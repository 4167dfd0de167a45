use crate::models::{ClubId, EstimationResult};

const STYLE: &str = "
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, sans-serif;
            margin: 0;
            min-height: 100vh;
            display: flex;
            flex-direction: column;
            align-items: center;
            justify-content: center;
            background: #fafaf9;
            color: #292524;
            padding: 24px;
        }
        .card {
            background: white;
            border: 1px solid #e7e5e4;
            border-radius: 24px;
            box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
            max-width: 28rem;
            width: 100%;
            padding: 2rem;
        }
        h1 { margin: 0; font-size: 1.5rem; font-weight: 900; }
        .subtitle { margin: 0 0 1.5rem; font-size: 0.75rem; color: #78716c; }
        .field-label {
            display: block;
            font-size: 0.75rem;
            font-weight: bold;
            color: #78716c;
            text-transform: uppercase;
            letter-spacing: 0.1em;
            margin-bottom: 0.5rem;
        }
        .clubs { display: flex; gap: 0.5rem; margin-bottom: 1.5rem; overflow-x: auto; }
        .club input { display: none; }
        .club span {
            display: inline-flex;
            align-items: center;
            justify-content: center;
            width: 3rem;
            height: 3rem;
            border-radius: 12px;
            font-weight: 900;
            background: #f5f5f4;
            color: #a8a29e;
            cursor: pointer;
        }
        .club input:checked + span { background: #1c1917; color: white; }
        .yards {
            width: 100%;
            box-sizing: border-box;
            font-size: 1.875rem;
            font-weight: 900;
            text-align: center;
            padding: 1rem;
            border: 1px solid #e7e5e4;
            border-radius: 16px;
            background: #fafaf9;
            margin-bottom: 1.5rem;
        }
        .calculate {
            width: 100%;
            background: #1c1917;
            color: white;
            font-weight: bold;
            padding: 1rem;
            border: none;
            border-radius: 16px;
            cursor: pointer;
        }
        .result { margin-top: 2rem; border-radius: 16px; padding: 1.5rem; text-align: center; }
        .result.normal { background: #f5f5f4; border: 1px solid #e7e5e4; }
        .result.joke { background: #fffbeb; border: 1px solid #fde68a; color: #92400e; }
        .result .eyebrow { font-size: 10px; font-weight: bold; text-transform: uppercase; color: #78716c; }
        .result .headline { font-size: 3rem; font-weight: 900; }
        .result.joke .headline { font-size: 1.875rem; }
        .result .unit { font-size: 1.125rem; color: #a8a29e; }
        .badge { display: inline-block; padding: 0.25rem 0.75rem; border-radius: 999px; font-size: 0.75rem; font-weight: bold; }
        .badge.up { background: #d1fae5; color: #047857; }
        .badge.down { background: #ffe4e6; color: #be123c; }
        .badge.joke { background: #fde68a; color: #78350f; }
        .quip { font-size: 0.75rem; color: #78716c; font-style: italic; margin-top: 1rem; }
";

/// Renders the calculator page with `selected` checked in the club picker.
///
/// `yards` is written back into the input only as a parsed integer, raw
/// request text never reaches the markup.
pub fn render_page(
    selected: ClubId,
    yards: Option<i64>,
    result: Option<&EstimationResult>,
) -> String {
    let clubs: String = ClubId::ALL
        .into_iter()
        .map(|club| {
            let checked = if club == selected { " checked" } else { "" };
            format!(
                "<label class=\"club\"><input type=\"radio\" name=\"club\" value=\"{0}\"{1}><span>{0}</span></label>",
                club, checked
            )
        })
        .collect();
    let yards_value = yards.map(|y| y.to_string()).unwrap_or_default();
    let result_card = result.map(render_result).unwrap_or_default();

    format!(
        "<!DOCTYPE html>
<html lang=\"en\">
<head>
    <meta charset=\"UTF-8\">
    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">
    <title>Iron Speed Calc</title>
    <meta name=\"description\" content=\"Estimate your clubhead speed instantly.\">
    <style>{}</style>
</head>
<body>
    <div class=\"card\">
        <h1>Iron Speed Calc</h1>
        <p class=\"subtitle\">Estimate your clubhead speed instantly.</p>
        <form method=\"get\" action=\"/\">
            <span class=\"field-label\">Select Iron</span>
            <div class=\"clubs\">{}</div>
            <label class=\"field-label\" for=\"yards\">Total Carry Distance (Yards)</label>
            <input class=\"yards\" id=\"yards\" type=\"number\" name=\"yards\" placeholder=\"e.g. 150\" value=\"{}\">
            <button class=\"calculate\" type=\"submit\">Calculate Speed</button>
        </form>
        {}
    </div>
</body>
</html>",
        STYLE, clubs, yards_value, result_card
    )
}

/// Result card shown under the form.
pub fn render_result(result: &EstimationResult) -> String {
    match result {
        EstimationResult::Joke(_) => format!(
            "<div class=\"result joke\">
            <div class=\"headline\">{}</div>
            <div class=\"badge joke\">{}</div>
        </div>",
            result.headline(),
            result.caption()
        ),
        EstimationResult::Normal { delta_mph, .. } => {
            let trend = if *delta_mph >= 0 { "up" } else { "down" };
            let quip = result
                .quip()
                .map(|quip| format!("<p class=\"quip\">\"{}\"</p>", quip))
                .unwrap_or_default();
            format!(
                "<div class=\"result normal\">
            <p class=\"eyebrow\">Estimated Clubhead Speed</p>
            <div class=\"headline\">{} <span class=\"unit\">mph</span></div>
            <div class=\"badge {}\">{}</div>
            {}
        </div>",
                result.headline(),
                trend,
                result.caption(),
                quip
            )
        }
    }
}

/// Plain page for requests the form cannot answer, such as an unknown club.
pub fn render_error_page(message: &str) -> String {
    format!(
        "<!DOCTYPE html>
<html lang=\"en\">
<head>
    <meta charset=\"UTF-8\">
    <title>Iron Speed Calc</title>
    <style>{}</style>
</head>
<body>
    <div class=\"card\">
        <h1>Iron Speed Calc</h1>
        <p class=\"subtitle\">{}</p>
        <a href=\"/\">Back to the calculator</a>
    </div>
</body>
</html>",
        STYLE, message
    )
}
