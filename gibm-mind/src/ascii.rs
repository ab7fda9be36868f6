use std::fmt::Write;

use gibm_tafel::{CalendarWindow, DisplayEvent, NavigationDirection, Rendered};

const HEADER: [&str; 4] = ["Zeit", "Fach", "Lehrer", "Raum"];

pub fn render(rendered: &Rendered) -> String {
  let mut out = String::new();

  writeln!(out, "{}\n", heading(rendered.window, rendered.direction)).unwrap();

  if rendered.schedule.is_empty() {
    out.push_str("No lessons scheduled this week.\n");
    return out;
  }

  for day in rendered.schedule.values() {
    if let Some(first) = day.first() {
      let date = first.start.date();
      writeln!(out, "{} {}", date.month(), ordinal(date.day())).unwrap();
    }
    out.push_str(&table(day));
    out.push('\n');
  }

  out
}

/// `<<` when the week slides in from the left, i.e. an earlier week.
pub fn heading(window: CalendarWindow, direction: NavigationDirection) -> String {
  let arrow = match direction {
    NavigationDirection::ForwardInTime => ">>",
    NavigationDirection::BackwardInTime => "<<",
  };

  format!("{} Week {} - {}", arrow, window.week(), window.year())
}

pub fn table(day: &[DisplayEvent]) -> String {
  let rows = day
    .iter()
    .map(|event| {
      [
        format!(
          "{:0>2}:{:0>2} - {:0>2}:{:0>2}",
          event.start.hour(),
          event.start.minute(),
          event.end.hour(),
          event.end.minute()
        ),
        event.subject.trim().to_string(),
        event.teacher.trim().to_string(),
        event.room.trim().to_string(),
      ]
    })
    .collect::<Vec<[String; 4]>>();

  let mut widths = HEADER.map(|title| title.chars().count());
  for row in &rows {
    for (width, column) in widths.iter_mut().zip(row) {
      *width = (*width).max(column.chars().count());
    }
  }

  let mut out = String::new();
  separator(&mut out, &widths);
  line(&mut out, &widths, &HEADER.map(String::from));
  separator(&mut out, &widths);
  for row in &rows {
    line(&mut out, &widths, row);
  }
  separator(&mut out, &widths);

  out
}

fn separator(out: &mut String, widths: &[usize; 4]) {
  for width in widths {
    out.push('+');
    out.push_str(&"-".repeat(width + 2));
  }
  out.push_str("+\n");
}

fn line(out: &mut String, widths: &[usize; 4], columns: &[String; 4]) {
  for (width, column) in widths.iter().zip(columns) {
    let padding = width - column.chars().count();
    write!(out, "| {}{} ", column, " ".repeat(padding)).unwrap();
  }
  out.push_str("|\n");
}

fn ordinal(day: u8) -> String {
  let suffix = match (day % 10, day % 100) {
    (_, 11..=13) => "th",
    (1, _) => "st",
    (2, _) => "nd",
    (3, _) => "rd",
    _ => "th",
  };

  format!("{day}{suffix}")
}

#[cfg(test)]
mod test {
  use gibm_tafel::{CalendarWindow, DisplayEvent, NavigationDirection, Rendered, WeekSchedule};
  use time::macros::datetime;

  use crate::ascii::{heading, ordinal, render, table};

  fn lesson() -> DisplayEvent {
    DisplayEvent {
      start: datetime!(2023 - 03 - 06 08:00),
      end: datetime!(2023 - 03 - 06 09:30),
      subject: "Mathematik".to_string(),
      teacher: "Meier".to_string(),
      room: "B204".to_string(),
      comment: String::new(),
    }
  }

  #[test]
  fn day_table() {
    let expected = "\
+---------------+------------+--------+------+
| Zeit          | Fach       | Lehrer | Raum |
+---------------+------------+--------+------+
| 08:00 - 09:30 | Mathematik | Meier  | B204 |
+---------------+------------+--------+------+
";
    assert_eq!(table(&[lesson()]), expected);
  }

  #[test]
  fn headings() {
    let window = CalendarWindow::new(10, 2023).unwrap();
    assert_eq!(
      heading(window, NavigationDirection::BackwardInTime),
      "<< Week 10 - 2023"
    );
    assert_eq!(ordinal(1), "1st");
    assert_eq!(ordinal(12), "12th");
    assert_eq!(ordinal(22), "22nd");
    assert_eq!(ordinal(23), "23rd");
  }

  #[test]
  fn empty_week_is_announced() {
    let rendered = Rendered {
      window: CalendarWindow::new(30, 2023).unwrap(),
      direction: NavigationDirection::ForwardInTime,
      schedule: WeekSchedule::new(),
    };
    assert!(render(&rendered).contains("No lessons scheduled"));
  }

  #[test]
  fn days_get_a_title() {
    let mut schedule = WeekSchedule::new();
    schedule.insert("2023-03-06".to_string(), vec![lesson()]);
    let rendered = Rendered {
      window: CalendarWindow::new(10, 2023).unwrap(),
      direction: NavigationDirection::ForwardInTime,
      schedule,
    };
    assert!(render(&rendered).contains("March 6th\n+---"));
  }
}
