//! Certificate of attendance rendering.

use std::fmt;

use eventhub_models::CertificateData;

/// Attendance duration printed on certificates unless configured otherwise.
pub const DEFAULT_ATTENDANCE_HOURS: u32 = 4;

/// Issuer printed at the foot of certificates unless configured otherwise.
pub const DEFAULT_ISSUER: &str = "EventHub";

/// A renderable certificate of attendance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certificate {
    /// Matched event and attendee.
    pub data: CertificateData,
    /// Attendance duration in hours.
    pub duration_hours: u32,
    /// Issuing organisation.
    pub issuer: String,
}

impl Certificate {
    /// Creates a certificate with the default duration and issuer.
    pub fn new(data: CertificateData) -> Self {
        Self {
            data,
            duration_hours: DEFAULT_ATTENDANCE_HOURS,
            issuer: DEFAULT_ISSUER.to_string(),
        }
    }

    /// Sets the attendance duration.
    pub fn with_duration_hours(mut self, hours: u32) -> Self {
        self.duration_hours = hours;
        self
    }

    /// Sets the issuer.
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = issuer.into();
        self
    }

    fn duration_label(&self) -> String {
        match self.duration_hours {
            1 => "1 hour".to_string(),
            n => format!("{} hours", n),
        }
    }
}

impl fmt::Display for Certificate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Certificate of Attendance")?;
        writeln!(f)?;
        writeln!(f, "This certifies that")?;
        writeln!(f, "{}", self.data.attendee_name)?;
        writeln!(f, "has attended")?;
        writeln!(f, "{}", self.data.event_title)?;
        writeln!(f, "for a duration of {} on", self.duration_label())?;
        writeln!(f, "{}", self.data.date)?;
        writeln!(f, "{}", "-".repeat(40))?;
        write!(f, "{}", self.issuer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> CertificateData {
        CertificateData {
            event_title: "Web Development Workshop".to_string(),
            attendee_name: "user".to_string(),
            date: "2024-06-01".to_string(),
        }
    }

    #[test]
    fn test_defaults() {
        let cert = Certificate::new(data());
        assert_eq!(cert.duration_hours, 4);
        assert_eq!(cert.issuer, "EventHub");
    }

    #[test]
    fn test_render() {
        let text = Certificate::new(data()).to_string();

        assert!(text.starts_with("Certificate of Attendance"));
        assert!(text.contains("This certifies that\nuser\nhas attended\nWeb Development Workshop\n"));
        assert!(text.contains("for a duration of 4 hours on\n2024-06-01\n"));
        assert!(text.ends_with("EventHub"));
    }

    #[test]
    fn test_render_configured() {
        let text = Certificate::new(data())
            .with_duration_hours(1)
            .with_issuer("ArtChain")
            .to_string();

        assert!(text.contains("for a duration of 1 hour on"));
        assert!(text.ends_with("ArtChain"));
    }
}
