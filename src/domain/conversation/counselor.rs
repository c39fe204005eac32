//! Counselor persona: the system instruction sent with every completion.

/// Short description of a stream, used to ground the counselor.
///
/// Matching is case-insensitive; unknown topics get a generic description.
pub fn stream_description(topic: &str) -> &'static str {
    match topic.trim().to_ascii_lowercase().as_str() {
        "science" => {
            "Science stream focuses on Physics, Chemistry, Biology, and Mathematics. It opens \
             doors to engineering, medicine, research, and technology careers."
        }
        "commerce" => {
            "Commerce stream covers Business Studies, Accountancy, Economics, and Mathematics. \
             It leads to careers in business, finance, accounting, and entrepreneurship."
        }
        "arts" => {
            "Arts/Humanities stream includes History, Geography, Political Science, Psychology, \
             and Literature. It offers careers in civil services, journalism, teaching, and \
             social work."
        }
        "engineering" => {
            "Engineering combines mathematics, science, and technology to design and build \
             solutions. It includes various specializations like Computer Science, Mechanical, \
             Civil, and Electrical engineering."
        }
        "medical" => {
            "Medical field focuses on healthcare, medicine, and life sciences. It includes \
             careers as doctors, nurses, researchers, and healthcare administrators."
        }
        "technology" => {
            "Technology stream covers computer science, software development, AI, and digital \
             innovation. It leads to careers in IT, software engineering, and emerging tech \
             fields."
        }
        _ => "This educational stream offers diverse career opportunities and skill development.",
    }
}

/// System instruction for a counselor specialising in `topic`.
pub fn system_prompt(topic: &str) -> String {
    format!(
        "You are an AI career counselor specializing in {topic}. {description}\n\n\
         Provide helpful, accurate information about:\n\
         - Career opportunities in {topic}\n\
         - Required skills and qualifications\n\
         - Educational pathways\n\
         - Industry trends\n\
         - Salary expectations\n\
         - Work-life balance\n\n\
         Keep responses concise and student-friendly. Always be encouraging and supportive.",
        topic = topic,
        description = stream_description(topic),
    )
}
