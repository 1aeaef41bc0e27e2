use shared::domain::UserRecord;

const HEADERS: [&str; 4] = ["ID", "Name", "Email", "Department"];

pub fn render(rows: &[UserRecord]) -> String {
    let cells: Vec<[String; 4]> = rows
        .iter()
        .map(|user| {
            [
                user.id.to_string(),
                user.name.clone(),
                user.email.clone(),
                user.department_label().to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = format_line(&HEADERS.map(str::to_string), &widths);
    for row in &cells {
        out.push_str(&format_line(row, &widths));
    }
    out
}

fn format_line(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    format!("{}\n", line.trim_end())
}

pub fn footer(page: usize, total_pages: usize, matching: usize) -> String {
    format!(
        "page {page} of {} ({matching} matching users)",
        total_pages.max(1)
    )
}
