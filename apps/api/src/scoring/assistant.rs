//! Scripted assistant: keyword-driven chat replies and canned résumé advice.
//!
//! Both are fixed lookup tables. A chat message naming a developer speciality
//! also yields a feed filter keyword the client can pass to `GET /api/v1/resumes`.

use serde::Serialize;

pub const CHAT_GREETING: &str =
    "Hello! I'm your AI assistant. Ask me about developers or how I can help with your resume.";

/// Checked in order; the first key contained in the message wins.
/// `developer` is last so the more specific entries take precedence.
const DEVELOPER_KEYWORDS: &[(&str, &str)] = &[
    ("web developer", "web development"),
    ("app developer", "app development"),
    ("frontend", "frontend"),
    ("backend", "backend"),
    ("fullstack", "fullstack"),
    ("cloud", "cloud"),
    ("react", "React"),
    ("javascript", "JavaScript"),
    ("developer", "development"),
];

const RESUME_ADVICE: &str = "I can help optimize your resume! Try using action verbs, quantify your achievements, and ensure your skills section aligns with the job descriptions you're targeting.";

const HELLO_REPLY: &str = "Hello! How can I assist you today? You can ask me about different types of developers or for resume advice.";

const FALLBACK_REPLY: &str = "I'm not sure I understand. You can ask me about developers (like 'Show me web developers'), or ask for resume tips.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub reply: String,
    /// Feed filter keyword for the matched speciality, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

impl ChatReply {
    fn text(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            filter: None,
        }
    }
}

/// Answers a chat message. Matching is case-insensitive substring search,
/// so "hi" also matches inside longer words.
pub fn chat_reply(message: &str) -> ChatReply {
    let message = message.to_lowercase();

    if let Some((_, speciality)) = DEVELOPER_KEYWORDS
        .iter()
        .find(|(key, _)| message.contains(key))
    {
        return ChatReply {
            reply: format!(
                "I've found some profiles specializing in {speciality}. Let me show you the available developers."
            ),
            filter: Some(speciality.to_string()),
        };
    }

    if message.contains("resume") || message.contains("cv") {
        ChatReply::text(RESUME_ADVICE)
    } else if message.contains("hello") || message.contains("hi") {
        ChatReply::text(HELLO_REPLY)
    } else {
        ChatReply::text(FALLBACK_REPLY)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SuggestionTopic {
    pub topic: &'static str,
    pub label: &'static str,
}

/// The assistant's menu, in display order.
pub const SUGGESTION_TOPICS: &[SuggestionTopic] = &[
    SuggestionTopic {
        topic: "skills",
        label: "Optimize your skills section for keywords",
    },
    SuggestionTopic {
        topic: "experience",
        label: "Add quantifiable achievements to your experience",
    },
    SuggestionTopic {
        topic: "summary",
        label: "Improve your professional summary",
    },
    SuggestionTopic {
        topic: "certifications",
        label: "Add relevant certifications",
    },
    SuggestionTopic {
        topic: "tailor",
        label: "Tailor your resume for a specific job posting",
    },
];

/// Canned advice for a menu topic. Unknown topics get the generic keyword tip.
pub fn topic_suggestion(topic: &str) -> &'static str {
    match topic {
        "skills" => "Consider adding industry-specific skills like 'Cloud Architecture', 'CI/CD', and 'Agile Methodologies' to increase your resume's ATS ranking.",
        "experience" => "Improve your work experience by adding measurable achievements. For example: 'Increased application performance by 40% through code optimization'.",
        "summary" => "For your professional summary, start with your years of experience, mention your specialization, and include 2-3 key achievements.",
        "certifications" => "Adding relevant certifications like AWS, Azure, or Google Cloud can significantly boost your ATS score for technical roles.",
        "tailor" => "Review the job description and incorporate key terms from it into your resume to improve ATS matching.",
        _ => "Make sure your resume includes relevant keywords for your target position.",
    }
}
