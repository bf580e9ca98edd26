use crate::core::registry::MovieRegistry;
use crate::core::MovieRecord;
use crate::utils::error::Result;
use std::io::Write;

/// Renders earnings in fixed-point form with at least one fractional digit,
/// e.g. `1000000.0`. Non-finite values print as `NaN`, `inf` or `-inf`.
pub fn format_earnings(earnings: f64) -> String {
    let mut text = earnings.to_string();
    if earnings.is_finite() && !text.contains('.') {
        text.push_str(".0");
    }
    text
}

/// Writes registry contents in the guide's console layout.
pub struct ConsolePresenter<W: Write> {
    out: W,
}

impl<W: Write> ConsolePresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Prints every field of `title` on its own line, or a not-found notice.
    pub fn print_by_title(&mut self, registry: &MovieRegistry, title: &str) -> Result<()> {
        match registry.find_by_title(title) {
            Some(movie) => {
                writeln!(self.out, "Title: {}", movie.title())?;
                writeln!(self.out, "Director: {}", movie.director())?;
                writeln!(self.out, "Genre: {}", movie.genre())?;
                writeln!(self.out, "Year Released: {}", movie.year_released())?;
                writeln!(
                    self.out,
                    "Box Office Earnings: {}",
                    format_earnings(movie.box_office_earnings())
                )?;
            }
            None => {
                writeln!(self.out, "Movie with title '{}' not found", title)?;
            }
        }
        Ok(())
    }

    /// One line per movie, in insertion order.
    pub fn print_all(&mut self, registry: &MovieRegistry) -> Result<()> {
        for movie in registry.iter() {
            self.print_summary_line(movie)?;
        }
        Ok(())
    }

    fn print_summary_line(&mut self, movie: &MovieRecord) -> Result<()> {
        writeln!(
            self.out,
            "Title: {}, Director: {}, Genre: {}, Year Released: {}, Box Office Earnings: {}",
            movie.title(),
            movie.director(),
            movie.genre(),
            movie.year_released(),
            format_earnings(movie.box_office_earnings())
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut ConsolePresenter<Vec<u8>>) -> Result<()>,
    {
        let mut presenter = ConsolePresenter::new(Vec::new());
        f(&mut presenter).unwrap();
        String::from_utf8(presenter.into_inner()).unwrap()
    }

    fn registry() -> MovieRegistry {
        let mut registry = MovieRegistry::new();
        registry.add("Movie 1", "Director 1", "Genre 1", 2020, 1_000_000.0).unwrap();
        registry.add("Movie 2", "Director 2", "Genre 2", 2021, 2_500_000.0).unwrap();
        registry
    }

    #[test]
    fn test_format_earnings() {
        assert_eq!(format_earnings(1_000_000.0), "1000000.0");
        assert_eq!(format_earnings(2_500_000.5), "2500000.5");
        assert_eq!(format_earnings(-3.0), "-3.0");
        assert_eq!(format_earnings(2_264_743_305.0), "2264743305.0");
        assert_eq!(format_earnings(1e16), "10000000000000000.0");
        assert_eq!(format_earnings(2.5e20), "250000000000000000000.0");
        assert_eq!(format_earnings(1e-5), "0.00001");
        assert_eq!(format_earnings(f64::NAN), "NaN");
        assert_eq!(format_earnings(f64::INFINITY), "inf");
    }

    #[test]
    fn test_print_by_title_found() {
        let registry = registry();
        let output = render(|p| p.print_by_title(&registry, "Movie 2"));

        assert_eq!(
            output,
            "Title: Movie 2\n\
             Director: Director 2\n\
             Genre: Genre 2\n\
             Year Released: 2021\n\
             Box Office Earnings: 2500000.0\n"
        );
    }

    #[test]
    fn test_print_by_title_missing() {
        let registry = registry();
        let output = render(|p| p.print_by_title(&registry, "Movie 9"));
        assert_eq!(output, "Movie with title 'Movie 9' not found\n");
    }

    #[test]
    fn test_print_all_in_insertion_order() {
        let registry = registry();
        let output = render(|p| p.print_all(&registry));

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "Title: Movie 1, Director: Director 1, Genre: Genre 1, Year Released: 2020, Box Office Earnings: 1000000.0"
        );
        assert!(lines[1].starts_with("Title: Movie 2,"));
    }

    #[test]
    fn test_print_all_empty_registry_writes_nothing() {
        let registry = MovieRegistry::new();
        assert!(render(|p| p.print_all(&registry)).is_empty());
    }
}
