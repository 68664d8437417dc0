use serde::Serialize;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TemplateService: Send + Sync + 'static {
    /// Render the given template.
    fn render<T: Template + 'static>(&self, template: &T) -> anyhow::Result<String>;
}

#[cfg(feature = "mock")]
impl MockTemplateService {
    pub fn with_render<T: Template + Send + PartialEq + std::fmt::Debug + 'static>(
        mut self,
        template: T,
        result: String,
    ) -> Self {
        self.expect_render()
            .once()
            .with(mockall::predicate::eq(template))
            .return_once(|_| Ok(result));
        self
    }
}

/// A serializable view model bound to an embedded template source.
///
/// The name doubles as the template's file name, so its extension decides
/// whether the output is escaped.
pub trait Template: Serialize {
    const NAME: &'static str;
    const TEMPLATE: &'static str;
}

pub const BASE_TEMPLATE: (&str, &str) = ("base.html", include_str!("../templates/base.html"));

macro_rules! templates {
    ($( $ident:ident ( $path:literal ), )* ) => {
        $(
            impl Template for $ident {
                const NAME: &'static str = $path;
                const TEMPLATE: &'static str = include_str!(concat!("../templates/", $path));
            }
        )*

        pub const TEMPLATES: &[(&str, &str)] = &[
            $( ($ident::NAME, $ident::TEMPLATE) ),*
        ];
    };
}

templates! {
    ContactFormTemplate("contact_form.html"),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactFormTemplate {
    pub title: String,
    pub submit_label: String,
    pub fields: Vec<ContactFormFieldTemplate>,
    pub submission: Option<ContactFormSubmissionTemplate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactFormFieldTemplate {
    pub name: String,
    pub label: String,
    pub required: bool,
    pub multiline: bool,
    pub value: String,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactFormSubmissionTemplate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: Option<String>,
}
