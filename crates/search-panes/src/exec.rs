use crate::{
    editor::EditorContext,
    entry::PaneOption,
    error::PaneError,
    field::PaneField,
    merge::finalize,
    options::{LeftJoin, SearchPaneOptions},
    query::{
        count::{CountQuery, counts_apply},
        label::LabelQuery,
    },
    request::SearchPanesRequest,
    resolve::resolve,
};
use tracing::debug;

impl SearchPaneOptions {
    /// Builds the option list of `field`'s pane.
    ///
    /// The label query carries this configuration's predicates, primary join,
    /// order and limit. The count query carries the same predicates plus the
    /// other panes' selections from `request`, joined through
    /// `cross_filter_join`. Both run concurrently; any failure fails the
    /// whole list.
    pub async fn exec<F: PaneField>(
        &self,
        field: &F,
        editor: &dyn EditorContext,
        request: &SearchPanesRequest,
        fields: &[F],
        cross_filter_join: Option<&LeftJoin>,
    ) -> Result<Vec<PaneOption>, PaneError> {
        let pane = resolve(self, field, editor);
        debug!(
            field = field.name(),
            table = %pane.table,
            value = %pane.value,
            label = %pane.label,
            "Resolved pane"
        );

        let db = editor.db();
        let labels = LabelQuery::new(&pane, self);
        let counts = CountQuery::new(&pane, field.name(), request, fields)
            .predicates(self.predicates())
            .join(cross_filter_join);

        let with_counts = counts_apply(field);
        let (labels, counts) = tokio::try_join!(labels.fetch(db), async {
            if with_counts {
                counts.fetch(db).await
            } else {
                Ok(Vec::new())
            }
        })?;

        let options = finalize(
            labels,
            &counts,
            self.manual_additions(),
            self.order_clause().is_some_and(|o| !o.trim().is_empty()),
        );
        debug!(field = field.name(), options = options.len(), "Pane options ready");
        Ok(options)
    }
}
