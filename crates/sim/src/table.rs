//! Fixed-width roster tables for terminal output.

use mech_core::Combatant;

const CELL_WIDTH: usize = 19;
const LABEL_WIDTH: usize = 18;

/// Render combatants as a table, wrapping after `per_line` columns.
pub fn render_roster(combatants: &[Combatant], per_line: usize) -> String {
    let mut out = String::new();
    for chunk in combatants.chunks(per_line.max(1)) {
        render_chunk(&mut out, chunk);
    }
    out
}

fn render_chunk(out: &mut String, chunk: &[Combatant]) {
    let separator = format!(
        "+{}+{}",
        "-".repeat(LABEL_WIDTH),
        format!("{}+", "-".repeat(CELL_WIDTH)).repeat(chunk.len())
    );

    out.push_str(&separator);
    out.push('\n');
    write_row(out, "Name", chunk.iter().map(|c| c.name().to_string()));
    write_row(
        out,
        "Health",
        chunk
            .iter()
            .map(|c| format!("{}/{}", c.hp_current(), c.hp_max())),
    );
    write_row(out, "Attack", chunk.iter().map(|c| c.attack().to_string()));

    let max_roles = chunk.iter().map(|c| c.roles().len()).max().unwrap_or(0);
    for i in 0..max_roles {
        let label = if i == 0 { "Roles:" } else { "" };
        write_row(
            out,
            label,
            chunk.iter().map(|c| {
                c.roles()
                    .get(i)
                    .map(ToString::to_string)
                    .unwrap_or_default()
            }),
        );
    }
    out.push_str(&separator);
    out.push('\n');
}

fn write_row(out: &mut String, label: &str, cells: impl Iterator<Item = String>) {
    out.push_str(&format!("|{label:<LABEL_WIDTH$}|"));
    for cell in cells {
        out.push_str(&format!("{:<CELL_WIDTH$}|", truncate(&cell, CELL_WIDTH)));
    }
    out.push('\n');
}

fn truncate(text: &str, width: usize) -> &str {
    match text.char_indices().nth(width) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mech_core::{Character, Role};

    #[test]
    fn renders_one_column_per_combatant() {
        let roster = [
            Combatant::new(Character::new("Alpha", 10, 14, vec![Role::Single, Role::AoE])),
            Combatant::new(Character::new("Beta", 20, 4, vec![Role::Support])).with_hp(7),
        ];

        let table = render_roster(&roster, 4);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 7);
        assert!(lines[1].starts_with("|Name              |Alpha"));
        assert!(lines[2].contains("10/10"));
        assert!(lines[2].contains("7/20"));
        assert!(lines[4].starts_with("|Roles:"));
        assert!(lines[5].contains("AoE"));
        assert_eq!(lines[0], lines[6]);
        assert!(lines.iter().all(|l| l.len() == lines[0].len()));
    }

    #[test]
    fn wraps_long_rosters() {
        let roster: Vec<Combatant> = (0..5)
            .map(|i| Combatant::new(Character::new(format!("Mech {i}"), 5, 5, vec![Role::Single])))
            .collect();

        let table = render_roster(&roster, 2);
        // three chunks of Name/Health/Attack/Roles plus two separators each
        assert_eq!(table.lines().count(), 3 * 6);
    }

    #[test]
    fn long_names_are_truncated_to_the_cell() {
        assert_eq!(truncate("(12) Skirmisher Prime Mk II", 19), "(12) Skirmisher Pri");
        assert_eq!(truncate("Tank", 19), "Tank");
    }
}
