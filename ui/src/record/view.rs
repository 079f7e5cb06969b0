use std::rc::Rc;

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use super::model::{GradeRecord, Learner, Program};
use super::ShareDisclosure;
use crate::components::{Column, FoldedColumn, FoldingTable, ShareRecordModal, TableRow};
use crate::core::{focus, interpolate, use_record_config};
use crate::i18n::Catalog;

const RECORD_WRAPPER_CLASS: &str = "program-record";

/// Sections of the record page, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordSection {
    Actions,
    TitleBar,
    LearnerInfo,
    Grades,
    ShareDialog,
}

/// Which sections render for the given inputs.
pub fn visible_sections(
    has_learner: bool,
    has_program: bool,
    has_grades: bool,
    dialog_open: bool,
) -> Vec<RecordSection> {
    [
        (RecordSection::Actions, has_learner),
        (RecordSection::TitleBar, has_program),
        (RecordSection::LearnerInfo, has_learner),
        (RecordSection::Grades, has_grades),
        (RecordSection::ShareDialog, dialog_open),
    ]
    .into_iter()
    .filter_map(|(section, visible)| visible.then_some(section))
    .collect()
}

/// A learner's verified record for one program.
///
/// `learner`, `program` and `grades` must be passed; `None` leaves out the
/// sections they drive.
#[component]
pub fn ProgramRecord(
    #[props(!optional)] learner: Option<Learner>,
    #[props(!optional)] program: Option<Program>,
    #[props(!optional)] grades: Option<Vec<GradeRecord>>,
    uuid: String,
    platform_name: String,
    catalog: Catalog,
) -> Element {
    let config = use_record_config();
    let mut disclosure = use_signal(ShareDisclosure::<Rc<MountedData>>::new);

    let sections = visible_sections(
        learner.is_some(),
        program.is_some(),
        grades.is_some(),
        disclosure.read().is_open(),
    );
    debug!("program record {uuid} sections: {sections:?}");

    let close_share = move |_: ()| {
        let anchor = disclosure.write().close();
        if let Some(button) = anchor {
            spawn(async move {
                focus::focus(button, "share button").await;
            });
        }
    };

    let show = |section: RecordSection| sections.contains(&section);
    let username = learner
        .as_ref()
        .map(|l| l.username.clone())
        .unwrap_or_default();
    let back_label = catalog.gettext("Back to My Records");
    let share_label = catalog.gettext("Share");

    rsx! {
        main { class: RECORD_WRAPPER_CLASS,
            if show(RecordSection::Actions) {
                section { id: "program-record-actions", class: "program-record-row",
                    a { href: "{config.records_url}", class: "top-bar-link flex-4",
                        span { class: "fa fa-caret-left", aria_hidden: "true" }
                        " {back_label}"
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-primary flex-1",
                        onmounted: move |evt| disclosure.write().set_anchor(evt.data()),
                        onclick: move |_| disclosure.write().open(),
                        "{share_label}"
                    }
                }
            }
            if show(RecordSection::TitleBar) {
                {program.as_ref().map(|program| render_title_bar(program, &platform_name, &catalog))}
            }
            if show(RecordSection::LearnerInfo) {
                {learner.as_ref().map(|learner| render_learner_info(learner, &platform_name, &catalog))}
            }
            if show(RecordSection::Grades) {
                {grades.as_ref().map(|grades| render_grades(grades, &catalog))}
            }
            if show(RecordSection::ShareDialog) {
                ShareRecordModal {
                    on_close: close_share,
                    parent_selector: ".{RECORD_WRAPPER_CLASS}",
                    username,
                    uuid: uuid.clone(),
                    catalog: catalog.clone(),
                }
            }
        }
    }
}

fn render_title_bar(program: &Program, platform_name: &str, catalog: &Catalog) -> Element {
    let title = interpolate(
        &catalog.gettext("{program_name} Record"),
        &[("program_name", &program.name)],
    );
    let school = interpolate(
        &catalog.gettext("{platform} | {school}"),
        &[("platform", platform_name), ("school", &program.school)],
    );

    rsx! {
        section { id: "program-record-title-bar", class: "program-record-row",
            div { "name": "program-name", class: "hd-3 flex-1", "{title}" }
            div { "name": "school-name", class: "hd-3", "{school}" }
        }
    }
}

fn render_learner_info(learner: &Learner, platform_name: &str, catalog: &Catalog) -> Element {
    let platform = [("platform", platform_name)];
    let columns = vec![
        Column::new("full_name", catalog.gettext("Name")),
        Column::new(
            "username",
            interpolate(&catalog.gettext("{platform} User ID"), &platform),
        ),
        Column::new("email", catalog.gettext("Email")),
    ];
    let folded_columns = vec![
        FoldedColumn::new("full_name")
            .class("hd-5 emphasized")
            .format(catalog.gettext("Name: {}")),
        FoldedColumn::new("username")
            .class("hd-5 emphasized")
            .format(interpolate(
                &catalog.gettext("{platform} User ID: {}"),
                &platform,
            )),
        FoldedColumn::new("email")
            .class("hd-5 emphasized")
            .format(catalog.gettext("Email: {}")),
    ];

    rsx! {
        section { id: "learner-info", class: "learner-info",
            // A single learner still goes through the table for its styling.
            FoldingTable {
                columns,
                folded_columns,
                data: vec![TableRow::from(learner)],
                data_key: "username",
            }
        }
    }
}

fn render_grades(grades: &[GradeRecord], catalog: &Catalog) -> Element {
    let columns = vec![
        Column::new("name", catalog.gettext("Course Name")),
        Column::new("school", catalog.gettext("School")),
        Column::new("attempts", catalog.gettext("Verified Attempts")),
        Column::new("course_id", catalog.gettext("Course ID")),
        Column::new("issue_date", catalog.gettext("Issue Date")),
        Column::new("percent_grade", catalog.gettext("Highest Grade Earned")),
        Column::new("letter_grade", catalog.gettext("Letter Grade")),
    ];
    let folded_columns = vec![
        FoldedColumn::new("name").class("hd-5 emphasized"),
        FoldedColumn::new("school"),
        FoldedColumn::new("attempts").format(catalog.gettext("Verified Attempts: {}")),
        FoldedColumn::new("course_id").format(catalog.gettext("Course ID: {}")),
        FoldedColumn::new("start").format(catalog.gettext("Start Date: {}")),
        FoldedColumn::new("end").format(catalog.gettext("End Date: {}")),
        FoldedColumn::new("percent_grade").format(catalog.gettext("Percent Grade: {}")),
        FoldedColumn::new("letter_grade").format(catalog.gettext("Letter Grade: {}")),
    ];
    let rows: Vec<TableRow> = grades.iter().map(TableRow::from).collect();

    rsx! {
        section { id: "program-record",
            FoldingTable {
                columns,
                folded_columns,
                data: rows,
                data_key: "name",
            }
            hr {}
        }
    }
}
