//! Built-in phrase bank. Guarantees the trainer is usable without any config file.

use crate::domain::{Category, PromptEntry};

/// Default prompts per category, in authoring order.
pub fn seed_phrase_bank() -> Vec<(Category, Vec<PromptEntry>)> {
  vec![
    (
      Category::Statement,
      vec![
        PromptEntry::new("Translate: I am learning German.", &["Ich lerne Deutsch."]),
        PromptEntry::new("Translate: We are going to the cinema today.", &["Wir gehen heute ins Kino."]),
        PromptEntry::new("Translate: My brother plays football.", &["Mein Bruder spielt Fußball."]),
        PromptEntry::new("Translate: I drink coffee every morning.", &["Ich trinke jeden Morgen Kaffee."]),
        PromptEntry::new("Translate: She works in an office.", &["Sie arbeitet in einem Büro."]),
      ],
    ),
    (
      Category::ModalVerbStatement,
      vec![
        PromptEntry::new("Translate: I can swim well.", &["Ich kann gut schwimmen."]),
        PromptEntry::new("Translate: We must get up early tomorrow.", &["Wir müssen morgen früh aufstehen."]),
        PromptEntry::new(
          "Translate: He wants to buy a new car.",
          &["Er möchte ein neues Auto kaufen.", "Er will ein Auto kaufen."],
        ),
        PromptEntry::new("Translate: Can you help me? (informal)", &["Kannst du mir helfen?"]),
        PromptEntry::new("Translate: She may not park here.", &["Sie darf hier nicht parken."]),
      ],
    ),
    (
      Category::SeparableVerb,
      vec![
        PromptEntry::new("Translate: I get up every day at six o’clock.", &["Ich stehe jeden Tag um sechs Uhr auf."]),
        PromptEntry::new("Translate: He calls his girlfriend.", &["Er ruft seine Freundin an."]),
        PromptEntry::new("Translate: We shop at the supermarket.", &["Wir kaufen im Supermarkt ein."]),
        PromptEntry::new("Translate: She opens the door.", &["Sie macht die Tür auf."]),
        PromptEntry::new("Translate: Are you coming along this evening?", &["Kommst du heute Abend mit?"]),
      ],
    ),
    (
      Category::YesNoQuestion,
      vec![
        PromptEntry::new(
          "Translate: Are you from Germany?",
          &["Kommst du aus Deutschland?", "Kommen Sie aus Deutschland?"],
        ),
        PromptEntry::new(
          "Translate: Do you have time tomorrow?",
          &["Hast du morgen Zeit?", "Haben Sie morgen Zeit?"],
        ),
        PromptEntry::new(
          "Translate: Do you like eating pizza?",
          &["Isst du gern Pizza?", "Essen Sie gern Pizza?"],
        ),
        PromptEntry::new(
          "Translate: Are you learning English?",
          &["Lernst du Englisch?", "Lernen Sie Englisch?"],
        ),
        PromptEntry::new(
          "Translate: Do you live in Berlin?",
          &["Wohnt ihr in Berlin?", "Wohnen Sie in Berlin?"],
        ),
      ],
    ),
    (
      Category::WQuestion,
      vec![
        PromptEntry::new("Translate: Where do you live?", &["Wo wohnst du?", "Wo wohnen Sie?"]),
        PromptEntry::new(
          "Translate: What are you doing at the weekend?",
          &["Was machst du am Wochenende?", "Was machen Sie am Wochenende?"],
        ),
        PromptEntry::new(
          "Translate: When do you start the course?",
          &["Wann fängst du den Kurs an?", "Wann fangen Sie den Kurs an?"],
        ),
        PromptEntry::new(
          "Translate: Why are you learning German?",
          &["Warum lernst du Deutsch?", "Warum lernen Sie Deutsch?"],
        ),
        PromptEntry::new("Translate: What is your name?", &["Wie heißt du?", "Wie heißen Sie?"]),
      ],
    ),
    (
      Category::ConnectorSentence,
      vec![
        PromptEntry::new(
          "Translate: It is raining heavily, therefore I stay at home. (Use deshalb)",
          &["Es regnet stark, deshalb bleibe ich zu Hause."],
        ),
        PromptEntry::new(
          "Translate: I am hungry, therefore I cook something. (Use deshalb)",
          &["Ich habe Hunger, deshalb koche ich etwas."],
        ),
        PromptEntry::new(
          "Translate: I would like to know if you have time tomorrow. (Use ob)",
          &["Ich möchte wissen, ob du morgen Zeit hast.", "Ich möchte wissen, ob Sie morgen Zeit haben."],
        ),
        PromptEntry::new(
          "Translate: I would like to know if he speaks German. (Use ob)",
          &["Ich möchte wissen, ob er Deutsch spricht."],
        ),
        PromptEntry::new(
          "Translate: I am staying at home because I am sick. (Use denn)",
          &["Ich bleibe zu Hause, denn ich bin krank."],
        ),
        PromptEntry::new(
          "Translate: I cannot come because I have to work. (Use weil)",
          &["Ich kann nicht kommen, weil ich arbeiten muss."],
        ),
        PromptEntry::new("Translate: I eat bread and drink tea.", &["Ich esse Brot und trinke Tee."]),
        PromptEntry::new(
          "Translate: Would you like tea or coffee?",
          &["Möchtest du Tee oder Kaffee?", "Möchten Sie Tee oder Kaffee?"],
        ),
      ],
    ),
  ]
}
