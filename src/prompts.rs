//! Prompt templates for the four coaching stages
//!
//! Each stage has its own template struct whose fields are exactly the values
//! the prompt needs, so a missing field is a compile error rather than a
//! literal `{placeholder}` leaking into the prompt. Every rendered prompt ends
//! with the JSON schema the model must answer with.

/// Tone variant selected by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    Growth,
    #[default]
    Survival,
}

pub const GROWTH_TONE: &str = "TON: Bądź energicznym trenerem. Motywuj krótko i konkretnie.";
pub const SURVIVAL_TONE: &str = "TON: Bądź łagodnym opiekunem. Zero presji, dużo empatii.";

impl Mode {
    /// Only the exact string `growth` selects [`Mode::Growth`]; anything else,
    /// including a missing value, is [`Mode::Survival`].
    pub fn from_request(value: Option<&str>) -> Self {
        match value {
            Some("growth") => Mode::Growth,
            _ => Mode::Survival,
        }
    }

    pub fn tone_instruction(self) -> &'static str {
        match self {
            Mode::Growth => GROWTH_TONE,
            Mode::Survival => SURVIVAL_TONE,
        }
    }
}

pub trait PromptTemplate {
    /// Stage name used in logs and error messages
    const STAGE: &'static str;

    fn render(&self) -> String;
}

/// Classifies the problem and asks one clarifying question
#[derive(Debug, Clone)]
pub struct TriagePrompt<'a> {
    pub task: &'a str,
    pub tone_instruction: &'a str,
}

impl PromptTemplate for TriagePrompt<'_> {
    const STAGE: &'static str = "triage";

    fn render(&self) -> String {
        format!(
            r#"Jesteś "Rozbijaczem" – coachem produktywności ADHD.

ZASADY:
1. Nie diagnozuj.
2. Bądź konkretny.

Zadanie użytkownika: "{task}"

Twoje zadanie:
1. Ustal, czy problem jest FIZYCZNY (zmęczenie, otoczenie) czy EMOCJONALNY (lęk, opór).
2. Zadaj 1 trafne pytanie doprecyzowujące.
{tone}

Zwróć czysty JSON:
{{
  "type": "physical" lub "emotional",
  "validation": "krótkie zdanie otuchy",
  "question": "pytanie doprecyzowujące"
}}
"#,
            task = self.task,
            tone = self.tone_instruction,
        )
    }
}

/// Names three blockers and a three-step warm-up for each
#[derive(Debug, Clone)]
pub struct BlockersPrompt<'a> {
    pub problem_type: &'a str,
    pub task: &'a str,
    pub user_answer: &'a str,
}

impl PromptTemplate for BlockersPrompt<'_> {
    const STAGE: &'static str = "blockers";

    fn render(&self) -> String {
        format!(
            r#"Typ: "{problem_type}"
Zadanie: "{task}"
Info: "{user_answer}"

ZASADY:
- Rozgrzewka to SETUP. Ma doprowadzić usera do stanu gotowości (otwarte programy, czyste biurko).
- To mają być czynności "bezmózgowe" (kliknij, otwórz, przesuń).

Twoje zadanie:
1. Zidentyfikuj 3 blokery.
2. Dla KAŻDEGO blokera napisz "Rozgrzewkę" (3 mikro-kroki).

Zwróć czysty JSON:
{{
  "options": [
    {{
      "blocker": "Nazwa Blokera 1",
      "steps": {{ "step1": "...", "step2": "...", "step3": "..." }}
    }},
    {{
      "blocker": "Nazwa Blokera 2",
      "steps": {{ "step1": "...", "step2": "...", "step3": "..." }}
    }},
    {{
      "blocker": "Nazwa Blokera 3",
      "steps": {{ "step1": "...", "step2": "...", "step3": "..." }}
    }}
  ]
}}
"#,
            problem_type = self.problem_type,
            task = self.task,
            user_answer = self.user_answer,
        )
    }
}

/// Refines the warm-up for the blocker the user picked
#[derive(Debug, Clone)]
pub struct FinalStepsPrompt<'a> {
    pub task: &'a str,
    pub blocker: &'a str,
    pub problem_type: &'a str,
    pub user_answer: &'a str,
}

impl PromptTemplate for FinalStepsPrompt<'_> {
    const STAGE: &'static str = "final_steps";

    fn render(&self) -> String {
        format!(
            r#"Zadanie: "{task}"
Własny Bloker: "{blocker}"
Typ Problemu: "{problem_type}"
INFO Z TRIAŻU: "{user_answer}"

Wygeneruj 3 kroki rozgrzewki (setup), które przygotują grunt pod pracę.
Kroki muszą być aktywne i fizyczne, aby przełamać paraliż.

Zwróć czysty JSON:
{{
  "step1": "...",
  "step2": "...",
  "step3": "..."
}}
"#,
            task = self.task,
            blocker = self.blocker,
            problem_type = self.problem_type,
            user_answer = self.user_answer,
        )
    }
}

/// Turns a finished warm-up into a five-minute sprint of nano-steps
#[derive(Debug, Clone)]
pub struct ActionStepsPrompt<'a> {
    pub task: &'a str,
    pub last_steps: &'a str,
}

impl PromptTemplate for ActionStepsPrompt<'_> {
    const STAGE: &'static str = "action_steps";

    fn render(&self) -> String {
        format!(
            r#"Zadanie główne: "{task}"

KONTEKST (Co użytkownik właśnie zrobił w Rozgrzewce):
{last_steps}

TWOJE ZADANIE:
Wygeneruj 3 kroki SPRINTU, które zajmą ŁĄCZNIE max 5 minut.
To mają być "Nano-Kroki" - tak małe, że nie wymagają myślenia, tylko wykonania.

🚨 KRYTYCZNE ZASADY CZASU:
1. KAŻDY krok musi zająć max 60 sekund.
2. ZABRONIONE jest: "Zastanów się", "Wymyśl", "Zaprojektuj", "Przeanalizuj" (to trwa za długo!).
3. DOZWOLONE jest: "Napisz jedno zdanie", "Stwórz pusty plik", "Wklej ten kod", "Nazwij plik".
4. Jeśli user otworzył IDE w rozgrzewce -> Pierwszy krok to "Napisz import..." lub "Stwórz plik...", a nie "Planowanie architektury".

Cel: Rozpędzić użytkownika przez małe sukcesy, a nie przytłoczyć go planowaniem.

Zwróć czysty JSON:
{{
  "step1": "Krok na 1 minutę...",
  "step2": "Krok na 1 minutę...",
  "step3": "Krok na 1 minutę..."
}}
"#,
            task = self.task,
            last_steps = self.last_steps,
        )
    }
}
