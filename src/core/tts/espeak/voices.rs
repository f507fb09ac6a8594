use crate::core::tts::base::Voice;

/// Parse the table printed by `espeak-ng --voices`.
///
/// ```text
/// Pty Language       Age/Gender VoiceName          File          Other Languages
///  2  en-us           --/M      English_(America)  gmw/en-US     (en 3)
/// ```
///
/// Malformed rows are skipped.
pub fn parse_voice_table(output: &str) -> Vec<Voice> {
    output
        .lines()
        .skip_while(|line| !line.trim_start().starts_with("Pty"))
        .skip(1)
        .filter_map(parse_voice_row)
        .collect()
}

fn parse_voice_row(line: &str) -> Option<Voice> {
    let mut columns = line.split_whitespace();
    let _priority = columns.next()?;
    let language = columns.next()?;
    let age_gender = columns.next()?;
    let name = columns.next()?;

    let gender = match age_gender.rsplit('/').next() {
        Some("M") => "Male",
        Some("F") => "Female",
        _ => "Unknown",
    };

    Some(Voice {
        id: language.to_string(),
        name: name.replace('_', " "),
        language: language.to_string(),
        gender: gender.to_string(),
    })
}
