// Dashboard builder - Append-only assembly of one dashboard document
use crate::domain::dashboard::{Dashboard, DEFAULT_DATASOURCE};
use crate::domain::panel::{Panel, Row, YAxis, DEFAULT_Y_FORMAT};
use crate::domain::templating::TemplateVariable;
use crate::error::GeneratorError;
use crate::infrastructure::json_writer::{render_sorted, write_document};
use std::path::Path;

/// Reference ids past this count no longer fit in one letter.
const SINGLE_LETTER_TARGETS: usize = 26;

/// Options for [`DashboardBuilder::add_graph_row`].
#[derive(Debug, Clone)]
pub struct GraphRowOptions {
    /// Row starts folded in the UI
    pub collapse: bool,
    /// Stack the series instead of overlaying them
    pub stack: bool,
    /// Lower bound of the primary y-axis; `None` lets the UI pick
    pub y_min: Option<f64>,
    /// Upper bound of the primary y-axis; `None` lets the UI pick
    pub y_max: Option<f64>,
    /// Unit format of the primary y-axis (`short`, `s`, `bytes`, `percent`, ...)
    pub y_format: String,
}

impl Default for GraphRowOptions {
    fn default() -> Self {
        Self {
            collapse: false,
            stack: false,
            y_min: Some(0.0),
            y_max: None,
            y_format: DEFAULT_Y_FORMAT.to_string(),
        }
    }
}

/// Options for [`DashboardBuilder::add_template_variable`].
#[derive(Debug, Clone, Default)]
pub struct TemplateVariableOptions {
    /// Filter applied to the values the query returns; empty for none
    pub regex: String,
    pub multi: bool,
    pub include_all: bool,
}

/// Builds a single dashboard. Rows and variables can only be appended.
///
/// Panel ids come from a counter owned by the builder, so they are 1..N in
/// the order rows are added and the same call sequence always yields the
/// same ids.
#[derive(Debug, Clone)]
pub struct DashboardBuilder {
    dashboard: Dashboard,
    datasource: String,
    last_id: u32,
}

impl DashboardBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            dashboard: Dashboard::new(title.into()),
            datasource: DEFAULT_DATASOURCE.to_string(),
            last_id: 0,
        }
    }

    /// Datasource for panels and variables added after this call.
    pub fn with_datasource(mut self, datasource: impl Into<String>) -> Self {
        self.datasource = datasource.into();
        self
    }

    pub fn add_template_variable(
        &mut self,
        name: impl Into<String>,
        label: impl Into<String>,
        query: impl Into<String>,
        options: TemplateVariableOptions,
    ) {
        let variable = TemplateVariable::query(
            name.into(),
            label.into(),
            query.into(),
            self.datasource.clone(),
            options.regex,
            options.multi,
            options.include_all,
        );
        self.dashboard.templating.list.push(variable);
    }

    /// Append a row holding one graph panel and return the panel's id.
    ///
    /// An empty `targets` list yields a blank graph. Targets past the 26th
    /// get two-letter reference ids (`AA`, `AB`, ...).
    pub fn add_graph_row<I, S>(
        &mut self,
        title: impl Into<String>,
        targets: I,
        options: GraphRowOptions,
    ) -> u32
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let title = title.into();
        let queries: Vec<String> = targets.into_iter().map(Into::into).collect();
        if queries.len() > SINGLE_LETTER_TARGETS {
            tracing::warn!(
                "Row '{}' has {} targets; reference ids continue past Z",
                title,
                queries.len()
            );
        }

        let id = self.next_id();
        tracing::debug!("Adding row '{}' (panel {}, {} targets)", title, id, queries.len());

        let panel = Panel::graph(
            id,
            title.clone(),
            self.datasource.clone(),
            queries,
            options.stack,
            YAxis::primary(options.y_format, options.y_min, options.y_max),
        );
        self.dashboard.rows.push(Row::new(title, options.collapse, panel));
        id
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    /// The exact text [`save`](Self::save) writes.
    pub fn render(&self) -> Result<String, GeneratorError> {
        render_sorted(&self.dashboard)
    }

    /// Write the dashboard to `path`, replacing any existing file.
    pub fn save(&self, path: &Path) -> Result<usize, GeneratorError> {
        let contents = self.render()?;
        write_document(path, &contents)?;
        tracing::info!(
            "Saved '{}' to {} ({} bytes)",
            self.dashboard.title,
            path.display(),
            contents.len()
        );
        Ok(contents.len())
    }

    fn next_id(&mut self) -> u32 {
        self.last_id += 1;
        self.last_id
    }
}
