//! HTML templates for candidate result emails.

use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailTemplate {
    Shortlist,
    Reject,
}

impl FromStr for EmailTemplate {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shortlist" => Ok(EmailTemplate::Shortlist),
            "reject" => Ok(EmailTemplate::Reject),
            _ => Err(()),
        }
    }
}

/// A rendered message ready for delivery.
#[derive(Debug, Clone)]
pub struct RenderedEmail {
    pub subject: String,
    pub html: String,
}

impl EmailTemplate {
    pub fn render(self, candidate_name: &str, job_title: &str) -> RenderedEmail {
        let candidate_name = escape_html(candidate_name);
        let job_title_html = escape_html(job_title);
        match self {
            EmailTemplate::Shortlist => RenderedEmail {
                subject: format!("Congratulations! You have been shortlisted for {job_title}"),
                html: shortlist_html(&candidate_name, &job_title_html),
            },
            EmailTemplate::Reject => RenderedEmail {
                subject: format!("Interview Results Update - {job_title}"),
                html: reject_html(&candidate_name, &job_title_html),
            },
        }
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn shortlist_html(candidate_name: &str, job_title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Congratulations!</title>
    <style>
        body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
        .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
        .header {{ background: linear-gradient(135deg, #3A7CFF, #2563EB); color: white; padding: 30px; text-align: center; border-radius: 10px 10px 0 0; }}
        .content {{ background: #f9f9f9; padding: 30px; border-radius: 0 0 10px 10px; }}
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>🎉 Congratulations!</h1>
            <p>You have been shortlisted for the next round</p>
        </div>
        <div class="content">
            <h2>Dear {candidate_name},</h2>
            <p>We are excited to inform you that you have been <strong>shortlisted</strong> for the <strong>{job_title}</strong> position!</p>
            <p>Your performance in our AI-powered interview was impressive, and we would like to move forward with the next steps in our hiring process.</p>
            <p>Our team will be in touch with you shortly to schedule the next round of interviews.</p>
            <p>Thank you for your interest in joining our team!</p>
            <br>
            <p>Best regards,<br>The Hiring Team</p>
        </div>
    </div>
</body>
</html>"#
    )
}

fn reject_html(candidate_name: &str, job_title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Interview Results Update</title>
    <style>
        body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
        .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
        .header {{ background: linear-gradient(135deg, #FF573A, #E53E3E); color: white; padding: 30px; text-align: center; border-radius: 10px 10px 0 0; }}
        .content {{ background: #f9f9f9; padding: 30px; border-radius: 0 0 10px 10px; }}
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>Interview Results Update</h1>
            <p>Thank you for your interest</p>
        </div>
        <div class="content">
            <h2>Dear {candidate_name},</h2>
            <p>Thank you for taking the time to participate in our interview process for the <strong>{job_title}</strong> position.</p>
            <p>After careful consideration, we have decided to move forward with other candidates for this role.</p>
            <p>We encourage you to apply for other positions that may be a better fit for your skills and experience. We will keep your information on file for future opportunities.</p>
            <p>We wish you the best of luck in your job search!</p>
            <br>
            <p>Best regards,<br>The Hiring Team</p>
        </div>
    </div>
</body>
</html>"#
    )
}
