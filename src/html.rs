use maud::{DOCTYPE, Markup, PreEscaped, html};

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "w-full bg-green-500 hover:bg-green-600 \
    text-white px-4 py-2 rounded-lg shadow-md";

pub const BUTTON_EXPORT_STYLE: &str = "inline-block bg-blue-500 hover:bg-blue-600 \
    text-white px-4 py-2 rounded-lg shadow-md";

// Form styles
pub const FORM_LABEL_STYLE: &str = "block text-white font-medium mb-2";
pub const FORM_TEXT_INPUT_STYLE: &str = "w-full px-4 py-2 border border-gray-600 \
    bg-gray-700 text-white rounded-lg mb-3";
pub const FORM_RADIO_GROUP_STYLE: &str = "flex gap-4 mb-4";
pub const FORM_RADIO_INPUT_STYLE: &str = "h-4 w-4 shrink-0 cursor-pointer \
    text-blue-600 border-gray-600";
pub const FORM_RADIO_LABEL_STYLE: &str = "text-white font-medium cursor-pointer";

// Table styles
pub const TABLE_HEADER_STYLE: &str = "px-6 py-3 text-left text-xs font-medium \
    text-gray-500 uppercase tracking-wider";

pub const TABLE_CELL_STYLE: &str = "px-6 py-4 whitespace-nowrap text-sm text-gray-400";

pub const TABLE_ROW_EVEN_STYLE: &str = "bg-gray-800";
pub const TABLE_ROW_ODD_STYLE: &str = "bg-gray-700";

// Card container
pub const CARD_STYLE: &str = "bg-gray-800 p-6 rounded-lg shadow-md";

pub enum HeadElement {
    /// The file path or URL to a JavaScript script.
    ScriptLink(String),
    /// JavaScript source code.
    ScriptSource(PreEscaped<String>),
}

pub fn base(title: &str, head_elements: &[HeadElement], content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Outlay" }
                link href="https://cdn.jsdelivr.net/npm/tailwindcss@2.2.19/dist/tailwind.min.css" rel="stylesheet";

                script src="https://unpkg.com/htmx.org@2.0.8" {}

                @for element in head_elements
                {
                    @match element
                    {
                        HeadElement::ScriptSource(text) => script { (text) }
                        HeadElement::ScriptLink(path) => script src=(path) {}
                    }
                }
            }

            body class="container max-w-full min-h-screen bg-gray-900 py-8"
            {
                (content)
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    // Template adapted from https://flowbite.com/blocks/marketing/404/
    let content = html!(
        section class="bg-gray-900"
        {
            div class="py-8 px-4 mx-auto max-w-screen-xl lg:py-16 lg:px-6"
            {
                div class="mx-auto max-w-screen-sm text-center"
                {
                    h1
                        class="mb-4 text-7xl tracking-tight font-extrabold
                            lg:text-9xl text-blue-500"
                    {
                        (header)
                    }

                    p
                        class="mb-4 text-3xl md:text-4xl tracking-tight
                            font-bold text-white"
                    {
                        (description)
                    }

                    p
                        class="mb-4 text-1xl md:text-2xl tracking-tight
                            text-white"
                    {
                        (fix)
                    }

                    a
                        href="/"
                        class="inline-flex text-white bg-blue-600
                            hover:bg-blue-800 font-medium rounded text-sm px-5
                            py-2.5 text-center my-4"
                    {
                        "Back to the tracker"
                    }
                }
            }
        }
    );

    base(title, &[], &content)
}

pub fn format_currency(number: f64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    let mut formatted_string = if number < 0.0 {
        negative_fmt.fmt_string(number.abs())
    } else if number > 0.0 {
        positive_fmt.fmt_string(number)
    } else {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        "$0.00".to_owned()
    };

    // numfmt omits the last trailing zero, so we must add it ourselves
    // For example, "12.30" is rendered as "12.3" so we append "0".
    if formatted_string.as_bytes()[formatted_string.len() - 3] != b'.' {
        formatted_string = format!("{formatted_string}0");
    }

    formatted_string
}
