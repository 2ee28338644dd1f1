//! Startparameter aus der Kommandozeile: `<screen_height> <screen_width>`.

use thiserror::Error;

/// Fehler beim Einlesen der Startparameter.
#[derive(Debug, Error, PartialEq)]
pub enum LaunchError {
    #[error("falsche Anzahl an Argumenten: erwartet 2, erhalten {0}")]
    ArgumentCount(usize),

    #[error("{name} ist keine Zahl: {value:?}")]
    NotNumeric { name: &'static str, value: String },

    #[error("{name} muss größer als 0 sein, ist {value}")]
    NotPositive { name: &'static str, value: f32 },
}

/// Fenstergröße beim Start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchConfig {
    /// Fensterhöhe in Pixeln
    pub height: f32,
    /// Fensterbreite in Pixeln
    pub width: f32,
}

impl LaunchConfig {
    /// Parst die Argumente ohne Programmnamen (Höhe zuerst, dann Breite).
    pub fn from_args<I, S>(args: I) -> Result<Self, LaunchError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<S> = args.into_iter().collect();
        let [height, width] = args.as_slice() else {
            return Err(LaunchError::ArgumentCount(args.len()));
        };

        Ok(Self {
            height: parse_dimension("screen_height", height.as_ref())?,
            width: parse_dimension("screen_width", width.as_ref())?,
        })
    }

    /// Usage-Zeile für die Fehlermeldung.
    pub fn usage(program: &str) -> String {
        format!("Usage: {program} <screen_height> <screen_width>")
    }

    /// Fenstergröße als `[Breite, Höhe]` für den ViewportBuilder.
    pub fn inner_size(&self) -> [f32; 2] {
        [self.width, self.height]
    }
}

fn parse_dimension(name: &'static str, raw: &str) -> Result<f32, LaunchError> {
    let value: f32 = raw.trim().parse().map_err(|_| LaunchError::NotNumeric {
        name,
        value: raw.to_string(),
    })?;
    if !(value.is_finite() && value > 0.0) {
        return Err(LaunchError::NotPositive { name, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_height_then_width() {
        let config = LaunchConfig::from_args(["600", "800"]).expect("gültige Argumente");
        assert_eq!(config.height, 600.0);
        assert_eq!(config.width, 800.0);
        assert_eq!(config.inner_size(), [800.0, 600.0]);
    }

    #[test]
    fn rejects_wrong_argument_count() {
        assert_eq!(
            LaunchConfig::from_args(["600"]),
            Err(LaunchError::ArgumentCount(1))
        );
        assert_eq!(
            LaunchConfig::from_args(Vec::<String>::new()),
            Err(LaunchError::ArgumentCount(0))
        );
    }

    #[test]
    fn rejects_non_numeric_and_non_positive() {
        assert!(matches!(
            LaunchConfig::from_args(["hoch", "800"]),
            Err(LaunchError::NotNumeric {
                name: "screen_height",
                ..
            })
        ));
        assert!(matches!(
            LaunchConfig::from_args(["600", "-5"]),
            Err(LaunchError::NotPositive {
                name: "screen_width",
                ..
            })
        ));
    }
}
