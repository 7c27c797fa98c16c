use std::io::{self, BufRead, Write};

use rectops_core::{
    Point, Rectangle, find_adjacencies, intersect, is_fully_contained_by, log_info,
};

use super::{adjacency, contains};

const MENU: &str = "What operation would you like to perform?
\t1. Identify intersections between rectangles
\t2. Check if first rectangle is fully contained in second.
\t3. Check for adjacency between rectangles
Please enter the number of your selection: ";

/// Runs the interactive prompt on stdin/stdout.
pub fn execute() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = run(&mut stdin.lock(), &mut stdout.lock()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Asks for an operation, reads two rectangles and prints the result.
///
/// Returns an error string on malformed input, an invalid rectangle or
/// an IO failure.
pub fn run(input: &mut impl BufRead, out: &mut impl Write) -> Result<(), String> {
    write!(out, "{MENU}").map_err(io_error)?;
    out.flush().map_err(io_error)?;
    let choice = read_line(input)?;

    let report = match choice.trim() {
        "1" => {
            let (first, second) = read_pair(input, out)?;
            format!("{}\n", intersect(&first, &second))
        }
        "2" => {
            let (first, second) = read_pair(input, out)?;
            format!("{}\n", contains::describe(is_fully_contained_by(&first, &second)))
        }
        "3" => {
            let (first, second) = read_pair(input, out)?;
            adjacency::describe(&find_adjacencies(&first, &second))
        }
        other => {
            log_info!("menu: unsupported choice {other:?}");
            return writeln!(out, "Please choose a supported option.").map_err(io_error);
        }
    };

    write!(out, "\nResults:\n{report}").map_err(io_error)
}

fn read_pair(
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<(Rectangle, Rectangle), String> {
    let first = read_rectangle(input, out, "Rectangle One Parameters")?;
    let second = read_rectangle(input, out, "Rectangle Two Parameters")?;
    Ok((first, second))
}

fn read_rectangle(
    input: &mut impl BufRead,
    out: &mut impl Write,
    title: &str,
) -> Result<Rectangle, String> {
    writeln!(out, "\n{title}").map_err(io_error)?;
    let ulx = prompt_int(input, out, "Upper left corner x-coordinate: ")?;
    let uly = prompt_int(input, out, "Upper left corner y-coordinate: ")?;
    let lrx = prompt_int(input, out, "Lower right corner x-coordinate: ")?;
    let lry = prompt_int(input, out, "Lower right corner y-coordinate: ")?;
    Rectangle::new(Point::new(ulx, uly), Point::new(lrx, lry)).map_err(|e| e.to_string())
}

fn prompt_int(input: &mut impl BufRead, out: &mut impl Write, label: &str) -> Result<i32, String> {
    write!(out, "{label}").map_err(io_error)?;
    out.flush().map_err(io_error)?;
    let line = read_line(input)?;
    let value = line.trim();
    value
        .parse()
        .map_err(|_| format!("'{value}' is not an integer"))
}

fn read_line(input: &mut impl BufRead) -> Result<String, String> {
    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(io_error)?;
    if read == 0 {
        return Err("unexpected end of input".into());
    }
    Ok(line)
}

fn io_error(e: io::Error) -> String {
    e.to_string()
}
