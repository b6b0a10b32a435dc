//! Localized rule messages.
//!
//! The catalog is plain static data selected once per pass from the
//! configured [`Language`] and handed to every rule.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Language {
    #[default]
    En,
    De,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Message {
    pub title: &'static str,
    pub description: &'static str,
}

impl Message {
    /// The description with each `{key}` replaced by its value.
    pub fn describe(&self, vars: &[(&str, &str)]) -> String {
        fill(self.description, vars)
    }
}

#[derive(Debug)]
pub struct Messages {
    pub img_alt: Message,
    pub main_missing: Message,
    pub main_too_many: Message,
    pub heading_multiple_h1: Message,
    pub heading_skipped_level: Message,
    pub contrast_normal: Message,
    pub contrast_large_text: Message,
    pub contrast_ui: Message,
    pub color_alone: Message,
    pub input_missing_described_by: Message,
    pub html_lang_missing: Message,
    pub fixes: FixMessages,
}

/// Titles of quick fixes. `{…}` placeholders as in [`Message::describe`].
#[derive(Debug)]
pub struct FixMessages {
    pub add_alt: &'static str,
    pub add_main: &'static str,
    pub change_heading_level: &'static str,
    pub replace_color: &'static str,
    pub remove_text_decoration: &'static str,
    pub add_error_message: &'static str,
    /// Placeholder text of the inserted error paragraph.
    pub error_placeholder: &'static str,
}

impl Messages {
    pub fn for_language(language: Language) -> &'static Messages {
        match language {
            Language::En => &EN,
            Language::De => &DE,
        }
    }
}

/// Fill `{key}` placeholders in a fix title.
pub fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    vars.iter().fold(template.to_string(), |text, (key, value)| {
        text.replace(&format!("{{{key}}}"), value)
    })
}

static EN: Messages = Messages {
    img_alt: Message {
        title: "Image is missing alt text",
        description: "Every <img> needs an alt attribute so screen readers can describe it. \
            Use alt=\"\" for purely decorative images (WCAG 1.1.1).",
    },
    main_missing: Message {
        title: "Document has no <main> landmark",
        description: "Wrap the primary content in a <main> element so assistive technology \
            can jump straight to it (WCAG 1.3.1, 2.4.1).",
    },
    main_too_many: Message {
        title: "More than one <main> landmark",
        description: "A document should contain exactly one visible <main> element.",
    },
    heading_multiple_h1: Message {
        title: "Multiple <h1> headings",
        description: "The page already has an <h1>. Use a single top-level heading and \
            nest further sections below it (WCAG 1.3.1).",
    },
    heading_skipped_level: Message {
        title: "Heading level skipped",
        description: "<{tag}> follows <h{previous}>. Heading levels should increase by one \
            at a time so the outline stays navigable (WCAG 1.3.1).",
    },
    contrast_normal: Message {
        title: "Insufficient text contrast",
        description: "Contrast ratio is {ratio}:1; normal text needs at least 4.5:1 \
            (WCAG 1.4.3).",
    },
    contrast_large_text: Message {
        title: "Insufficient contrast for large text",
        description: "Contrast ratio is {ratio}:1; large text needs at least 3:1 \
            (WCAG 1.4.3).",
    },
    contrast_ui: Message {
        title: "Insufficient contrast for UI component",
        description: "Contrast ratio is {ratio}:1; user interface components need at \
            least 3:1 (WCAG 1.4.11).",
    },
    color_alone: Message {
        title: "Link is distinguished by color alone",
        description: "This link sets a color but removes its underline. Keep a non-color \
            cue such as text-decoration (WCAG 1.4.1).",
    },
    input_missing_described_by: Message {
        title: "Required field has no error description",
        description: "Required inputs should reference an error or hint text via \
            aria-describedby so validation feedback is announced (WCAG 3.3.1).",
    },
    html_lang_missing: Message {
        title: "Document language is not set",
        description: "Add a non-empty lang attribute to <html> so screen readers use the \
            right pronunciation (WCAG 3.1.1).",
    },
    fixes: FixMessages {
        add_alt: "Add alt=\"\" attribute",
        add_main: "Wrap content in <main>",
        change_heading_level: "Change <h{from}> to <h{to}>",
        replace_color: "Replace color with {color}",
        remove_text_decoration: "Remove text-decoration: none",
        add_error_message: "Add error message element and aria-describedby",
        error_placeholder: "Please fill out this field.",
    },
};

static DE: Messages = Messages {
    img_alt: Message {
        title: "Bild ohne Alternativtext",
        description: "Jedes <img> braucht ein alt-Attribut, damit Screenreader es \
            beschreiben können. Für rein dekorative Bilder alt=\"\" verwenden (WCAG 1.1.1).",
    },
    main_missing: Message {
        title: "Dokument hat keinen <main>-Bereich",
        description: "Den Hauptinhalt in ein <main>-Element einschließen, damit \
            Hilfstechnologien direkt dorthin springen können (WCAG 1.3.1, 2.4.1).",
    },
    main_too_many: Message {
        title: "Mehr als ein <main>-Bereich",
        description: "Ein Dokument sollte genau ein sichtbares <main>-Element enthalten.",
    },
    heading_multiple_h1: Message {
        title: "Mehrere <h1>-Überschriften",
        description: "Die Seite hat bereits eine <h1>. Nur eine Hauptüberschrift verwenden \
            und weitere Abschnitte darunter gliedern (WCAG 1.3.1).",
    },
    heading_skipped_level: Message {
        title: "Überschriftenebene übersprungen",
        description: "<{tag}> folgt auf <h{previous}>. Überschriftenebenen sollten nur um \
            eins steigen, damit die Gliederung navigierbar bleibt (WCAG 1.3.1).",
    },
    contrast_normal: Message {
        title: "Unzureichender Textkontrast",
        description: "Das Kontrastverhältnis beträgt {ratio}:1; normaler Text benötigt \
            mindestens 4.5:1 (WCAG 1.4.3).",
    },
    contrast_large_text: Message {
        title: "Unzureichender Kontrast für großen Text",
        description: "Das Kontrastverhältnis beträgt {ratio}:1; großer Text benötigt \
            mindestens 3:1 (WCAG 1.4.3).",
    },
    contrast_ui: Message {
        title: "Unzureichender Kontrast für Bedienelement",
        description: "Das Kontrastverhältnis beträgt {ratio}:1; Bedienelemente benötigen \
            mindestens 3:1 (WCAG 1.4.11).",
    },
    color_alone: Message {
        title: "Link nur durch Farbe erkennbar",
        description: "Dieser Link setzt eine Farbe, entfernt aber die Unterstreichung. \
            Einen zusätzlichen Hinweis wie text-decoration beibehalten (WCAG 1.4.1).",
    },
    input_missing_described_by: Message {
        title: "Pflichtfeld ohne Fehlerbeschreibung",
        description: "Pflichtfelder sollten per aria-describedby auf einen Fehler- oder \
            Hinweistext verweisen, damit Rückmeldungen vorgelesen werden (WCAG 3.3.1).",
    },
    html_lang_missing: Message {
        title: "Dokumentsprache nicht gesetzt",
        description: "Ein nicht leeres lang-Attribut an <html> ergänzen, damit Screenreader \
            die richtige Aussprache verwenden (WCAG 3.1.1).",
    },
    fixes: FixMessages {
        add_alt: "alt=\"\"-Attribut hinzufügen",
        add_main: "Inhalt in <main> einschließen",
        change_heading_level: "<h{from}> in <h{to}> ändern",
        replace_color: "Farbe durch {color} ersetzen",
        remove_text_decoration: "text-decoration: none entfernen",
        add_error_message: "Fehlermeldung und aria-describedby hinzufügen",
        error_placeholder: "Bitte füllen Sie dieses Feld aus.",
    },
};
