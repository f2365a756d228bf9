//! The content registry: every string, card, stage, image and FAQ entry the
//! page shows.
//!
//! The built-in registry is compiled in and built once per process
//! ([`builtin`]). An external registry can be loaded from JSON; it goes
//! through the same [`ContentRegistry::validate`] checks.

use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

use tracing::debug;

use crate::error::{Result, SiteError};
use crate::types::*;

static BUILTIN: LazyLock<ContentRegistry> = LazyLock::new(builtin_registry);

/// The compiled-in registry. Built on first use, shared for the rest of the
/// process.
pub fn builtin() -> &'static ContentRegistry {
    &BUILTIN
}

impl ContentRegistry {
    /// Parse and validate a registry from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        let registry: ContentRegistry = serde_json::from_str(text)?;
        registry.validate()?;
        Ok(registry)
    }

    /// Read, parse and validate a registry from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| SiteError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let registry = Self::from_json(&text)?;
        debug!(path = %path.display(), sections = registry.sections.len(), "loaded content registry");
        Ok(registry)
    }

    /// Pretty JSON for the whole registry.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the registry invariants:
    ///
    /// - navigation ids are unique
    /// - every navigation id names a section the page actually renders
    /// - cards carry a title and a description
    /// - stages, images and FAQ entries have their required text
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for (index, section) in self.sections.iter().enumerate() {
            if section.id.trim().is_empty() {
                return Err(SiteError::EmptyField {
                    section: "sections",
                    index,
                    field: "id",
                });
            }
            if !seen.insert(section.id.as_str()) {
                return Err(SiteError::DuplicateSectionId(section.id.clone()));
            }
            if PageSection::from_anchor(&section.id).is_none() {
                return Err(SiteError::MissingSection(section.id.clone()));
            }
        }

        for (name, cards) in [
            ("what", &self.what.cards),
            ("why", &self.why.cards),
            ("types", &self.types.cards),
        ] {
            for (index, card) in cards.iter().enumerate() {
                require(name, index, "title", &card.title)?;
                require(name, index, "description", &card.description)?;
            }
        }

        for (index, stage) in self.learn.stages.iter().enumerate() {
            require("learn", index, "title", &stage.title)?;
            require("learn", index, "action_hint", &stage.action_hint)?;
        }

        let images = self.hero.images.iter().chain(&self.gallery.images);
        for (index, image) in images.enumerate() {
            require("images", index, "source_url", &image.source_url)?;
        }

        for (index, entry) in self.faq.entries.iter().enumerate() {
            require("faq", index, "question", &entry.question)?;
            require("faq", index, "answer", &entry.answer)?;
        }

        Ok(())
    }

    /// Navigation entry for a page section, if the registry links to it.
    pub fn descriptor(&self, section: PageSection) -> Option<&SectionDescriptor> {
        let anchor = section.anchor()?;
        self.sections.iter().find(|s| s.id == anchor)
    }
}

fn require(section: &'static str, index: usize, field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SiteError::EmptyField {
            section,
            index,
            field,
        });
    }
    Ok(())
}

fn nav(id: &str, label: &str) -> SectionDescriptor {
    SectionDescriptor {
        id: id.into(),
        label: label.into(),
    }
}

fn card(icon: IconName, title: &str, description: &str) -> CategoryCard {
    CategoryCard {
        icon,
        title: title.into(),
        description: description.into(),
        skills: None,
        related_jobs: None,
    }
}

fn field(icon: IconName, title: &str, description: &str, skills: &str, jobs: &str) -> CategoryCard {
    CategoryCard {
        skills: Some(skills.into()),
        related_jobs: Some(jobs.into()),
        ..card(icon, title, description)
    }
}

fn stage(title: &str, points: &[&str], action_hint: &str) -> RoadmapStage {
    RoadmapStage {
        title: title.into(),
        points: points.iter().map(|p| p.to_string()).collect(),
        action_hint: action_hint.into(),
    }
}

fn image(source_url: &str, alt_text: &str) -> GalleryImage {
    GalleryImage {
        source_url: source_url.into(),
        alt_text: alt_text.into(),
    }
}

fn faq(question: &str, answer: &str) -> FaqEntry {
    FaqEntry {
        question: question.into(),
        answer: answer.into(),
    }
}

fn link(href: &str, label: &str) -> CtaLink {
    CtaLink {
        href: href.into(),
        label: label.into(),
    }
}

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/{photo}?auto=format&fit=crop&w=1600&q=80")
}

fn builtin_registry() -> ContentRegistry {
    use IconName::*;

    ContentRegistry {
        brand: Brand {
            badge: "DT".into(),
            name: "Digital Tech 101".into(),
        },
        sections: vec![
            nav("what", "เทคโนโลยีดิจิทัลคืออะไร"),
            nav("why", "สำคัญต่อชีวิตประจำวันอย่างไร"),
            nav("types", "มีอะไรบ้าง"),
            nav("learn", "จะเริ่มศึกษาอย่างไร"),
            nav("gallery", "แกลเลอรีภาพ"),
            nav("faq", "คำถามที่พบบ่อย"),
        ],
        hero: HeroContent {
            headline_lead: "ปูพื้นฐาน".into(),
            headline_highlight: "เทคโนโลยีดิจิทัล".into(),
            headline_tail: "สำหรับทุกคน".into(),
            subtitle: "โทนดำ‑น้ำเงินล้ำสมัย เน้นความคมชัด และเอฟเฟกต์แสงแบบนีออน".into(),
            primary_cta: link("#learn", "เริ่มต้นเรียนรู้"),
            secondary_cta: link("#types", "สำรวจสาขายอดนิยม"),
            images: vec![
                image(&unsplash("photo-1518779578993-ec3579fee39f"), "วงจรรวมและชิป"),
                image(
                    &unsplash("photo-1519389950473-47ba0277781c"),
                    "ทีมงานกับจอภาพข้อมูลอนาคต",
                ),
            ],
        },
        what: CardSection {
            heading: "เทคโนโลยีดิจิทัลคืออะไร".into(),
            intro: Some(Intro {
                emphasis: Some("เทคโนโลยีดิจิทัล".into()),
                text: "คือการใช้ข้อมูลดิจิทัลร่วมกับฮาร์ดแวร์ ซอฟต์แวร์ และเครือข่าย เพื่อสร้าง ประมวลผล จัดเก็บ และแลกเปลี่ยนข้อมูลอย่างมีประสิทธิภาพ ตัวอย่างเช่น สมาร์ตโฟน แอปพลิเคชัน คลาวด์คอมพิวติง ปัญญาประดิษฐ์ และอินเทอร์เน็ตของสรรพสิ่ง (IoT)".into(),
            }),
            cards: vec![
                card(
                    Chip,
                    "ดิจิไทซ์ (Digitize)",
                    "แปลงสิ่งอนาล็อกเป็นดิจิทัล เช่น เอกสาร เสียง รูปภาพ",
                ),
                card(
                    Cloud,
                    "ดิจิทัลไลเซชัน (Digitalization)",
                    "ใช้เทคโนโลยีช่วยทำงานเดิมให้ดีขึ้น รวดเร็วขึ้น",
                ),
                card(
                    Blocks,
                    "ทรานส์ฟอร์เมชัน (Digital Transformation)",
                    "ปรับกระบวนการและรูปแบบธุรกิจใหม่ด้วยดิจิทัล",
                ),
            ],
        },
        why: CardSection {
            heading: "ทำไมจึงสำคัญต่อชีวิตประจำวัน".into(),
            intro: None,
            cards: vec![
                card(
                    Wifi,
                    "การสื่อสารและการทำงาน",
                    "วิดีโอคอล อีเมล แชต เครื่องมือทำงานร่วมกัน ทำให้ทำงานได้จากทุกที่",
                ),
                card(
                    Database,
                    "ข้อมูลและการตัดสินใจ",
                    "ค้นหา วิเคราะห์ และใช้ข้อมูลช่วยตัดสินใจส่วนตัวและธุรกิจ",
                ),
                card(
                    Shield,
                    "ความปลอดภัยและความเป็นส่วนตัว",
                    "รู้เท่าทันภัยไซเบอร์ ตั้งค่าความเป็นส่วนตัว ป้องกันข้อมูลส่วนบุคคล",
                ),
            ],
        },
        types: CardSection {
            heading: "สาขาหลักของเทคโนโลยีดิจิทัล (มีอะไรบ้าง)".into(),
            intro: Some(Intro {
                emphasis: None,
                text: "เลือกสำรวจแต่ละสาขาเพื่อดูทักษะ เครื่องมือ และตัวอย่างอาชีพ".into(),
            }),
            cards: vec![
                field(
                    Robot,
                    "ปัญญาประดิษฐ์ (AI)",
                    "ระบบที่เรียนรู้จากข้อมูลเพื่อคาดการณ์และช่วยตัดสินใจ",
                    "พื้นฐาน Python, สถิติ, ML, LLM",
                    "Data/ML Engineer, AI Engineer",
                ),
                field(
                    Cloud,
                    "คลาวด์คอมพิวติง",
                    "เช่าใช้ทรัพยากรประมวลผลและจัดเก็บข้อมูลผ่านอินเทอร์เน็ต",
                    "บริการ IaaS/PaaS/SaaS, Docker, CI/CD",
                    "Cloud/DevOps Engineer",
                ),
                field(
                    Shield,
                    "ความมั่นคงไซเบอร์",
                    "ปกป้องระบบ เครือข่าย และข้อมูลจากการโจมตี",
                    "เครือข่าย, การเข้ารหัส, Pentest",
                    "Security Analyst, SOC",
                ),
                field(
                    Database,
                    "วิทยาการข้อมูล",
                    "เก็บ วิเคราะห์ และสื่อสารข้อมูลให้เกิดความเข้าใจ",
                    "SQL, Python, Visualization",
                    "Data Analyst/Scientist",
                ),
                field(
                    Blocks,
                    "บล็อกเชนและเว็บ3",
                    "บันทึกธุรกรรมแบบกระจายศูนย์ที่ตรวจสอบได้",
                    "Smart Contract, Solidity, Token",
                    "Blockchain Dev",
                ),
                field(
                    ArVr,
                    "AR/VR และกราฟิก",
                    "สร้างประสบการณ์เสมือนและภาพสามมิติ",
                    "Unity/Unreal, 3D, UX",
                    "XR Developer, 3D Artist",
                ),
                field(
                    Chip,
                    "ซอฟต์แวร์และเว็บ",
                    "พัฒนาแอปพลิเคชันและเว็บไซต์ที่ผู้คนใช้ทุกวัน",
                    "HTML/CSS/JS, React, API",
                    "Frontend/Backend/Full-stack",
                ),
                field(
                    Wifi,
                    "เครือข่ายและ 5G",
                    "เชื่อมต่ออุปกรณ์และบริการด้วยความเร็วสูง",
                    "Routing, Wireless, Edge",
                    "Network Engineer",
                ),
                field(
                    Robot,
                    "หุ่นยนต์และ IoT",
                    "อุปกรณ์ที่รับรู้และควบคุมโลกจริงผ่านเซนเซอร์",
                    "ไมโครคอนโทรลเลอร์, Sensor, MQTT",
                    "Embedded/Robotics",
                ),
            ],
        },
        learn: LearnSection {
            heading: "จะเริ่มศึกษาอย่างไร (Roadmap แนะนำ)".into(),
            stages: vec![
                stage(
                    "Beginner — พื้นฐานดิจิทัล",
                    &[
                        "ความรู้ดิจิทัล (Digital Literacy): ระบบไฟล์ คลาวด์ อีเมล ความปลอดภัยพื้นฐาน",
                        "ทักษะโค้ดดิ้งเบื้องต้น: HTML/CSS/JS หรือ Python",
                        "การคิดเชิงตรรกะและอัลกอริทึม",
                    ],
                    "เริ่มจากคอร์สฟรีและโปรเจ็กต์เล็ก ๆ 1–2 สัปดาห์",
                ),
                stage(
                    "Intermediate — ลงลึกสาขา",
                    &[
                        "เลือกสาขาที่สนใจ (เช่น เว็บ, ข้อมูล, AI)",
                        "ทำโปรเจ็กต์ 2–3 ชิ้น สร้างพอร์ตโฟลิโอใน GitHub",
                        "เรียนรู้เครื่องมือมาตรฐาน: Git, Docker, API, Cloud เบื้องต้น",
                    ],
                    "เข้าร่วมชุมชน แก้โจทย์จากโลกจริง",
                ),
                stage(
                    "Advanced — มืออาชีพ",
                    &[
                        "ออกแบบสถาปัตยกรรม/ระบบ, ทดสอบอัตโนมัติ, สเกลและความปลอดภัย",
                        "เรียนรู้แนวปฏิบัติ DevOps/ML Ops",
                        "เตรียมตัวสัมภาษณ์และปรับเรซูเม่",
                    ],
                    "ทำงานร่วมทีม เปิดซอร์ส และรับ Feedback อย่างสม่ำเสมอ",
                ),
            ],
            resources: ResourcePanel {
                heading: "แหล่งเรียนรู้ที่แนะนำ".into(),
                columns: vec![
                    vec![
                        "คอร์สออนไลน์: MOOC (Coursera, edX, Udemy, Kaggle Learn)".into(),
                        "เว็บทางการ/เอกสาร: MDN Web Docs, Python Docs, Cloud Docs".into(),
                        "ชุมชน: Stack Overflow, GitHub, Reddit, Facebook Groups".into(),
                    ],
                    vec![
                        "เครื่องมือ: VS Code, Git & GitHub, Colab/Notebook, Figma".into(),
                        "แนะแนวอาชีพ: LinkedIn Learning, Roadmap.sh, Awesome Lists".into(),
                        "ภาษาไทย: คอร์ส/เพจชุมชนในไทย, YouTube ช่องสอนเขียนโค้ด".into(),
                    ],
                ],
            },
        },
        gallery: GallerySection {
            heading: "แกลเลอรีภาพประกอบ".into(),
            subtitle: "ภาพบรรยากาศแนวอนาคต โทนดำ‑น้ำเงิน ใช้ประกอบการสอน/นำเสนอ".into(),
            images: vec![
                image(
                    &unsplash("photo-1518770660439-4636190af475"),
                    "วงจรอิเล็กทรอนิกส์สีน้ำเงิน",
                ),
                image(
                    &unsplash("photo-1510915228340-29c85a43dcfe"),
                    "เมืองล้ำสมัยและเส้นแสง",
                ),
                image(
                    &unsplash("photo-1520607162513-77705c0f0d4a"),
                    "ข้อมูลแบบกราฟและเส้นใยแสง",
                ),
                image(
                    &unsplash("photo-1542834369-f10ebf06d3cb"),
                    "จอภาพโค้ดและระบบคลาวด์",
                ),
                image(&unsplash("photo-1551281044-8e8b71f70cc2"), "หุ่นยนต์และแขนกล"),
                image(
                    &unsplash("photo-1549924231-f129b911e442"),
                    "เครือข่ายและไซเบอร์ซีเคียวริตี้",
                ),
            ],
        },
        faq: FaqSection {
            heading: "คำถามที่พบบ่อย".into(),
            entries: vec![
                faq(
                    "ต้องมีพื้นฐานคณิตศาสตร์เยอะไหม?",
                    "ไม่จำเป็นสำหรับทุกสาขา เว็บและซอฟต์แวร์ทั่วไปใช้ตรรกะมากกว่าคณิตศาสตร์ขั้นสูง ส่วน AI/ข้อมูลจะใช้สถิติบ้าง เริ่มแบบค่อยเป็นค่อยไปได้",
                ),
                faq(
                    "ควรเริ่มภาษาอะไรดี?",
                    "ถ้าสนใจพัฒนาเว็บ เริ่มที่ HTML/CSS/JavaScript; ถ้าสนใจข้อมูล/AI เริ่มที่ Python; ถ้าสนใจระบบ/เกม อาจดู C/C++/C#",
                ),
                faq(
                    "ต้องมีคอมสเปกแรงไหม?",
                    "งานส่วนใหญ่ใช้คอมทั่วไปได้ และใช้คลาวด์ช่วยประมวลผล/ฝึกโมเดลได้",
                ),
            ],
        },
        footer: FooterCta {
            heading: "พร้อมเริ่มเรียนรู้แล้วหรือยัง?".into(),
            tagline: "ตั้งเป้าหมาย 30 วัน ทำโปรเจ็กต์เล็ก ๆ ทุกสัปดาห์ แล้วแชร์ผลงาน".into(),
            primary: link("#learn", "เปิดแผนการเรียน"),
            secondary: link("#types", "เลือกสาขาที่ใช่"),
        },
        labels: Labels {
            skills: "ทักษะ:".into(),
            related_jobs: "อาชีพที่เกี่ยวข้อง:".into(),
            stage: "ขั้นที่".into(),
            action: "แนะนำ:".into(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn builtin_registry_is_valid() {
        builtin().validate().expect("built-in content must validate");
    }

    #[test]
    fn builtin_nav_covers_every_anchored_section_but_top() {
        let ids: Vec<_> = builtin().sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["what", "why", "types", "learn", "gallery", "faq"]);
        assert!(builtin().descriptor(PageSection::Hero).is_none());
        assert_eq!(
            builtin().descriptor(PageSection::Faq).map(|s| s.label.as_str()),
            Some("คำถามที่พบบ่อย")
        );
    }

    #[test]
    fn builtin_collection_sizes() {
        let c = builtin();
        assert_eq!(c.what.cards.len(), 3);
        assert_eq!(c.why.cards.len(), 3);
        assert_eq!(c.types.cards.len(), 9);
        assert_eq!(c.learn.stages.len(), 3);
        assert_eq!(c.gallery.images.len(), 6);
        assert_eq!(c.faq.entries.len(), 3);
        assert!(c.types.cards.iter().all(|card| card.skills.is_some() && card.related_jobs.is_some()));
    }

    #[test]
    fn duplicate_section_id_is_rejected() {
        let mut c = builtin().clone();
        c.sections.push(nav("faq", "again"));
        match c.validate() {
            Err(SiteError::DuplicateSectionId(id)) => assert_eq!(id, "faq"),
            other => panic!("expected duplicate id error, got {other:?}"),
        }
    }

    #[test]
    fn orphan_section_id_is_rejected() {
        let mut c = builtin().clone();
        c.sections.push(nav("pricing", "Pricing"));
        assert!(matches!(c.validate(), Err(SiteError::MissingSection(id)) if id == "pricing"));
    }

    #[test]
    fn blank_card_description_is_rejected() {
        let mut c = builtin().clone();
        c.why.cards[1].description = "  ".into();
        match c.validate() {
            Err(SiteError::EmptyField {
                section,
                index,
                field,
            }) => {
                assert_eq!((section, index, field), ("why", 1, "description"));
            }
            other => panic!("expected empty field error, got {other:?}"),
        }
    }

    #[test]
    fn json_export_loads_back_identically() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("content.json");
        std::fs::write(&path, builtin().to_json().unwrap()).expect("write content");

        let loaded = ContentRegistry::load(&path).expect("load content");
        assert_eq!(&loaded, builtin());
    }

    #[test]
    fn load_reports_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let err = ContentRegistry::load(&temp.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, SiteError::Read { .. }));
    }

    #[test]
    fn from_json_rejects_garbage() {
        assert!(matches!(
            ContentRegistry::from_json("{ not json"),
            Err(SiteError::Content(_))
        ));
    }
}
