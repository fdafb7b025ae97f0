//! Static question bank for the practice quizzes.
//!
//! Lookup is a pure function of `(subject, topic)`: a known subject has a
//! shared base list plus a handful of topic-specific questions, an unknown
//! topic falls back to the subject's base list, and an unknown subject
//! yields an empty list (rendered as "no quiz available", not an error).

pub const SUBJECT_ROMANIAN: &str = "Limba română";
pub const SUBJECT_MATH: &str = "Matematică";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    pub explanation: String,
}

fn q(prompt: &str, options: &[&str], correct_index: usize, explanation: &str) -> QuestionRecord {
    debug_assert!(correct_index < options.len());
    QuestionRecord {
        prompt: prompt.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_index,
        explanation: explanation.to_string(),
    }
}

/// Subjects offered on the practice page, in display order.
pub fn subjects() -> [&'static str; 2] {
    [SUBJECT_ROMANIAN, SUBJECT_MATH]
}

/// Topic menu for a subject. Unknown subjects get generic placeholders,
/// matching the original menu behavior.
pub fn topics(subject: &str) -> Vec<&'static str> {
    match subject {
        SUBJECT_ROMANIAN => vec![
            "Gramatică",
            "Vocabular",
            "Punctuație",
            "Text argumentativ",
            "Rezumat",
        ],
        SUBJECT_MATH => vec![
            "Fracții",
            "Proporții & Procente",
            "Ecuații",
            "Geometrie",
            "Probleme (aplicații)",
        ],
        _ => vec!["Option 1", "Option 2", "Option 3", "Option 4", "Option 5"],
    }
}

/// Resolve the ordered question list for one quiz attempt. Deterministic,
/// no I/O; repeated calls return identical sequences.
pub fn resolve(subject: &str, topic: &str) -> Vec<QuestionRecord> {
    match subject {
        SUBJECT_MATH => math_quiz(topic),
        SUBJECT_ROMANIAN => romanian_quiz(topic),
        _ => Vec::new(),
    }
}

fn math_quiz(topic: &str) -> Vec<QuestionRecord> {
    let base = vec![
        q(
            "(72 - 8·7):4 + 6 =",
            &["8", "9", "10", "12"],
            2,
            "72-56=16; 16:4=4; 4+6=10.",
        ),
        q("5^2 + 2^4 =", &["29", "33", "41", "45"], 2, "25 + 16 = 41."),
        q(
            "3/5 + 7/10 =",
            &["13/10", "17/10", "19/10", "21/10"],
            0,
            "3/5 = 6/10; 6/10 + 7/10 = 13/10.",
        ),
        q(
            "Media aritmetică a numerelor 18 și 26 este:",
            &["20", "21", "22", "23"],
            2,
            "(18+26)/2 = 22.",
        ),
        q(
            "Într-un triunghi dreptunghic cu catetele 9 și 12, ipotenuza este:",
            &["13", "14", "15", "16"],
            2,
            "Pitagora: √(9²+12²)=√225=15.",
        ),
    ];

    let extra = match topic {
        "Fracții" => q(
            "5/4 - 3/8 =",
            &["5/8", "7/8", "9/8", "11/8"],
            1,
            "5/4 = 10/8; 10/8 - 3/8 = 7/8.",
        ),
        "Proporții & Procente" => q(
            "Un produs crește cu 20% apoi scade cu 20%. Prețul final este:",
            &[
                "Egal cu inițial",
                "Mai mare",
                "Mai mic",
                "Nu se poate determina",
            ],
            2,
            "1.2P apoi 0.8×1.2P=0.96P → mai mic.",
        ),
        "Ecuații" => q(
            "Rezolvă: |2x - 5| = x + 1",
            &["{6}", "{4/3, 6}", "{-1, 6}", "{4/3}"],
            1,
            "Cazuri: 2x-5=x+1→x=6; -(2x-5)=x+1→x=4/3.",
        ),
        _ => return base,
    };

    // Topic quizzes swap the last shared question for the topic one.
    let mut questions: Vec<_> = base.into_iter().take(4).collect();
    questions.push(extra);
    questions
}

fn romanian_quiz(topic: &str) -> Vec<QuestionRecord> {
    let mut base = vec![
        q(
            "Într-un rezumat este corect să:",
            &[
                "Folosești citate",
                "Îți spui opinia",
                "Prezinți faptele pe scurt, obiectiv",
                "Analizezi figurile de stil",
            ],
            2,
            "Rezumat = fapte, obiectiv, fără citate și fără opinii.",
        ),
        q(
            "În caracterizare, o regulă sigură este:",
            &[
                "Trăsătură + dovadă din text",
                "Doar adjective fără exemple",
                "Doar citate",
                "Doar opinia ta",
            ],
            0,
            "Pentru punctaj: trăsătură + exemplu/dovadă.",
        ),
        q(
            "În text argumentativ, structura recomandată este:",
            &[
                "Afirmație + explicație + exemplu",
                "Exemplu + exemplu",
                "Doar afirmație",
                "Citate multe",
            ],
            0,
            "Cea mai sigură schemă: afirmație, explicație, exemplu.",
        ),
        q(
            "Ideea principală într-un text informativ este:",
            &[
                "Un detaliu minor",
                "Mesajul central al textului",
                "O opinie personală",
                "O întrebare",
            ],
            1,
            "Ideea principală = informația centrală / mesajul textului.",
        ),
        q(
            "„Mesajul” unui text liric este:",
            &[
                "Povestea pe scurt",
                "Ideea/semnificația generală transmisă",
                "Lista figurilor de stil",
                "Biografia autorului",
            ],
            1,
            "Mesaj = semnificația/ideea generală.",
        ),
    ];

    let extra = match topic {
        "Gramatică" => q(
            "Transformă la plural: „Noaptea este liniștită.”",
            &[
                "Noaptea sunt liniștite.",
                "Nopțile este liniștită.",
                "Nopțile sunt liniștite.",
                "Nopțile sunt liniștit.",
            ],
            2,
            "Plural corect: „Nopțile sunt liniștite.”",
        ),
        "Rezumat" => q(
            "În rezumat trebuie să eviți:",
            &[
                "Ideile principale",
                "Ordinea logică a întâmplărilor",
                "Opiniile personale",
                "Formulările concise",
            ],
            2,
            "Rezumatul nu include opinii personale.",
        ),
        _ => return base,
    };

    base.push(extra);
    base
}
