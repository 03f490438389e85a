//! Translation of the document tree into Akoma Ntoso markup.
//!
//! The output contract relied on by downstream renderers:
//!
//! - root `akomaNtoso` holds either one `statement` or one `documentCollection`
//! - a statement has `meta`, `preface`, an optional `preamble`, `mainBody` and
//!   optional `attachments`
//! - a paragraph has `num` and `content` children, sub-items are `list/point`
//! - a collection lists its documents under `components/component/statement`

use super::eid::{label_fragment, slugify, UniqueIds};
use super::element::Element;
use crate::config::{ConversionConfig, AKN_NAMESPACE, COLLECTION_NAME};
use crate::types::{DocumentCollection, DocumentItem, NumberedParagraph, OperativeSection};

/// Identifier used for an operative section without a trigger keyword.
const UNLABELED_SECTION: &str = "unlabeled";

/// Values that differ between the collection and a single document in the
/// FRBR identification block.
struct Identity<'a> {
    work_iri: String,
    date_name: &'a str,
    subtype: &'a str,
    number: String,
    show_as: String,
}

/// Builds markup trees. Output depends only on the input tree and the
/// configuration, so repeated builds are identical.
#[derive(Debug, Clone, Copy)]
pub struct AknBuilder<'a> {
    config: &'a ConversionConfig,
}

impl<'a> AknBuilder<'a> {
    #[must_use]
    pub fn new(config: &'a ConversionConfig) -> Self {
        Self { config }
    }

    fn slug(&self, text: &str) -> String {
        slugify(text, self.config.eid_max_len)
    }

    fn root() -> Element {
        Element::new("akomaNtoso").with_attr("xmlns", AKN_NAMESPACE)
    }

    /// Build the `documentCollection` for a whole corpus.
    #[must_use]
    pub fn build_collection(&self, collection: &DocumentCollection) -> Element {
        let mut body = Element::new("collectionBody");
        let mut components = Element::new("components");
        let mut ids = UniqueIds::new();

        for (part, documents) in collection.parts() {
            let part_eid = ids.claim(&format!("cmp_{}", self.slug(part)));
            body.push(
                Element::new("component")
                    .with_attr("eId", &part_eid)
                    .with_child(
                        Element::new("componentRef")
                            .with_attr("src", format!("#{part_eid}"))
                            .with_attr("showAs", part),
                    ),
            );

            for document in documents {
                let eid = ids.claim(&format!("cmp_{}", document.short_id()));
                components.push(
                    Element::new("component")
                        .with_attr("eId", eid)
                        .with_child(self.build_statement(document)),
                );
            }
        }

        let document_collection = Element::new("documentCollection")
            .with_attr("name", COLLECTION_NAME)
            .with_attr("xml:lang", "en")
            .with_child(self.collection_meta())
            .with_child(self.collection_preface())
            .with_child(body)
            .with_child(components);

        Self::root().with_child(document_collection)
    }

    /// Build a standalone `akomaNtoso` document for one statement.
    #[must_use]
    pub fn build_document(&self, document: &DocumentItem) -> Element {
        Self::root().with_child(self.build_statement(document))
    }

    /// Build the `statement` element for one document.
    #[must_use]
    pub fn build_statement(&self, document: &DocumentItem) -> Element {
        let mut statement = Element::new("statement")
            .with_attr("name", document.category.name())
            .with_attr("xml:lang", "en")
            .with_child(self.document_meta(document))
            .with_child(Self::document_preface(document));

        if !document.enacting_formula.is_empty() || !document.preamble_sections.is_empty() {
            statement.push(self.preamble(document));
        }

        statement.push(self.main_body(document));

        if !document.annexes.is_empty() {
            statement.push(Self::attachments(document));
        }

        statement
    }

    fn identification(&self, identity: &Identity<'_>) -> Element {
        let conference = &self.config.conference;
        let date = conference.date.as_str();
        let author = format!("#{}", conference.body);
        let expression_iri = format!("{}/eng@{date}", identity.work_iri);
        let manifestation_iri = format!("{expression_iri}/.xml");

        let work = Element::new("FRBRWork")
            .with_child(frbr_value("FRBRthis", format!("{}/!main", identity.work_iri)))
            .with_child(frbr_value("FRBRuri", &identity.work_iri))
            .with_child(frbr_date(date, identity.date_name))
            .with_child(Element::new("FRBRauthor").with_attr("href", &author))
            .with_child(frbr_value("FRBRcountry", "un"))
            .with_child(frbr_value("FRBRsubtype", identity.subtype))
            .with_child(
                frbr_value("FRBRnumber", &identity.number).with_attr("showAs", &identity.show_as),
            );

        let expression = Element::new("FRBRExpression")
            .with_child(frbr_value("FRBRthis", format!("{expression_iri}/!main")))
            .with_child(frbr_value("FRBRuri", &expression_iri))
            .with_child(frbr_date(date, identity.date_name))
            .with_child(Element::new("FRBRauthor").with_attr("href", &author))
            .with_child(Element::new("FRBRlanguage").with_attr("language", "eng"));

        let manifestation = Element::new("FRBRManifestation")
            .with_child(frbr_value("FRBRthis", &manifestation_iri))
            .with_child(frbr_value("FRBRuri", &manifestation_iri))
            .with_child(frbr_date(&self.config.markup_date, "XMLMarkup"))
            .with_child(Element::new("FRBRauthor").with_attr("href", "#converter"));

        Element::new("identification")
            .with_attr("source", "#itu")
            .with_child(work)
            .with_child(expression)
            .with_child(manifestation)
    }

    fn references(&self, body_label: String) -> Element {
        let body = &self.config.conference.body;
        Element::new("references")
            .with_attr("source", "#converter")
            .with_child(organization(
                "itu",
                "/ontology/organizations/itu",
                "International Telecommunication Union",
            ))
            .with_child(organization(
                body,
                &format!("/ontology/organizations/{body}"),
                &body_label,
            ))
            .with_child(organization(
                "converter",
                "/ontology/software/akn4itu-converter",
                "AKN4ITU Converter",
            ))
    }

    fn collection_meta(&self) -> Element {
        let conference = &self.config.conference;
        let identity = Identity {
            work_iri: format!(
                "/akn/un/officialGazette/publication/{}/{}/{}",
                conference.body, conference.date, conference.publication
            ),
            date_name: "publication",
            subtype: "publication",
            number: conference.publication.clone(),
            show_as: conference.publication_label.clone(),
        };

        Element::new("meta")
            .with_child(self.identification(&identity))
            .with_child(self.references(conference.body_label()))
    }

    fn collection_preface(&self) -> Element {
        let conference = &self.config.conference;
        let title = format!(
            "of the {} ({}, {})",
            conference.name, conference.location, conference.year
        );
        Element::new("preface").with_child(
            Element::new("longTitle").with_child(
                Element::new("p")
                    .with_child(Element::new("docType").with_text("FINAL ACTS"))
                    .with_child(Element::new("docTitle").with_text(title)),
            ),
        )
    }

    fn document_meta(&self, document: &DocumentItem) -> Element {
        let conference = &self.config.conference;
        let number_slug = document.number.replace('/', "-").replace(' ', "_");
        let number = format!("{}-{number_slug}", document.category.prefix());
        let identity = Identity {
            work_iri: format!(
                "/akn/un/statement/deliberation/{}/{}/{number}",
                conference.body, conference.date
            ),
            date_name: "adoption",
            subtype: "deliberation",
            number,
            show_as: format!(
                "{} {} ({})",
                document.category.as_str(),
                document.number,
                document.revision
            ),
        };

        Element::new("meta")
            .with_child(self.identification(&identity))
            .with_child(self.references(format!("ITU {}", conference.name)))
    }

    fn document_preface(document: &DocumentItem) -> Element {
        let long_title = Element::new("longTitle")
            .with_attr("eId", "longTitle_1")
            .with_child(
                Element::new("p")
                    .with_child(Element::new("docType").with_text(document.category.as_str()))
                    .with_child(
                        Element::new("docNumber")
                            .with_text(format!("{} ({})", document.number, document.revision)),
                    ),
            );

        let title = Element::new("container")
            .with_attr("name", "title")
            .with_attr("eId", "container_title")
            .with_child(Element::new("p").with_text(&document.title));

        Element::new("preface")
            .with_child(long_title)
            .with_child(title)
    }

    fn preamble(&self, document: &DocumentItem) -> Element {
        let mut preamble = Element::new("preamble").with_attr("eId", "preamble");

        if !document.enacting_formula.is_empty() {
            preamble.push(
                Element::new("formula")
                    .with_attr("name", "enactingFormula")
                    .with_attr("eId", "formula_1")
                    .with_child(Element::new("p").with_text(&document.enacting_formula)),
            );
        }

        let mut ids = UniqueIds::new();
        let mut recital_counter = 0usize;

        for section in &document.preamble_sections {
            let eid = ids.claim(&format!("recs_{}", self.slug(&section.keyword)));
            let mut recitals = Element::new("recitals").with_attr("eId", eid).with_child(
                Element::new("intro").with_child(
                    Element::new("p").with_child(Element::new("i").with_text(&section.keyword)),
                ),
            );

            for recital in &section.recitals {
                recital_counter += 1;
                let mut element =
                    Element::new("recital").with_attr("eId", format!("rec_{recital_counter}"));
                if !recital.label.is_empty() {
                    element.push(Element::new("num").with_text(&recital.label));
                }
                element.push(Element::new("p").with_text(&recital.text));
                recitals.push(element);
            }

            preamble.push(recitals);
        }

        preamble
    }

    fn main_body(&self, document: &DocumentItem) -> Element {
        let mut main_body = Element::new("mainBody").with_attr("eId", "body");
        let mut ids = UniqueIds::new();

        for section in &document.operative_sections {
            main_body.push(self.operative_section(section, &mut ids));
        }

        main_body
    }

    fn operative_section(&self, section: &OperativeSection, ids: &mut UniqueIds) -> Element {
        let slug = match self.slug(&section.keyword) {
            slug if slug.is_empty() => UNLABELED_SECTION.to_string(),
            slug => slug,
        };
        let eid = ids.claim(&format!("hcont_{slug}"));

        let mut container = Element::new("hcontainer")
            .with_attr("name", &slug)
            .with_attr("eId", &eid);

        if !section.keyword.is_empty() {
            container.push(
                Element::new("heading").with_child(Element::new("i").with_text(&section.keyword)),
            );
        }

        for (idx, paragraph) in section.paragraphs.iter().enumerate() {
            container.push(Self::paragraph(&eid, idx + 1, paragraph));
        }

        container
    }

    fn paragraph(section_eid: &str, position: usize, paragraph: &NumberedParagraph) -> Element {
        if paragraph.num.is_empty() {
            return Element::new("paragraph")
                .with_attr(
                    "eId",
                    format!("{section_eid}__para_unnumbered_{position}"),
                )
                .with_child(
                    Element::new("content")
                        .with_child(Element::new("p").with_text(&paragraph.text)),
                );
        }

        let eid = format!("{section_eid}__para_{}", label_fragment(&paragraph.num));
        let mut element = Element::new("paragraph")
            .with_attr("eId", &eid)
            .with_child(Element::new("num").with_text(&paragraph.num));

        if paragraph.sub_items.is_empty() {
            element.push(
                Element::new("content").with_child(Element::new("p").with_text(&paragraph.text)),
            );
            return element;
        }

        let mut content = Element::new("content");
        if !paragraph.text.is_empty() {
            content.push(Element::new("p").with_text(&paragraph.text));
        }
        element.push(content);

        let mut list = Element::new("list").with_attr("eId", format!("{eid}__list_1"));
        for item in &paragraph.sub_items {
            list.push(
                Element::new("point")
                    .with_attr("eId", format!("{eid}__point_{}", label_fragment(&item.label)))
                    .with_child(Element::new("num").with_text(&item.label))
                    .with_child(
                        Element::new("content").with_child(Element::new("p").with_text(&item.text)),
                    ),
            );
        }
        element.push(list);

        element
    }

    fn attachments(document: &DocumentItem) -> Element {
        let mut attachments = Element::new("attachments");

        for (idx, annex) in document.annexes.iter().enumerate() {
            let number = idx + 1;
            let mut body = Element::new("mainBody");
            for block in annex.split("\n\n").filter(|b| !b.trim().is_empty()) {
                body.push(Element::new("p").with_text(block));
            }

            attachments.push(
                Element::new("attachment")
                    .with_attr("eId", format!("att_{number}"))
                    .with_child(Element::new("heading").with_text(format!("Annex {number}")))
                    .with_child(
                        Element::new("doc")
                            .with_attr("name", "annex")
                            .with_child(Element::new("meta").with_child(
                                Element::new("identification").with_attr("source", "#itu"),
                            ))
                            .with_child(body),
                    ),
            );
        }

        attachments
    }
}

fn frbr_value(name: &str, value: impl AsRef<str>) -> Element {
    Element::new(name).with_attr("value", value)
}

fn frbr_date(date: &str, name: &str) -> Element {
    Element::new("FRBRdate")
        .with_attr("date", date)
        .with_attr("name", name)
}

fn organization(eid: &str, href: &str, show_as: &str) -> Element {
    Element::new("TLCOrganization")
        .with_attr("eId", eid)
        .with_attr("href", href)
        .with_attr("showAs", show_as)
}
