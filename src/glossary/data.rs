//! The glossary table

use super::models::GlossaryEntry;

pub(super) const GLOSSARY: [GlossaryEntry; 50] = [
    GlossaryEntry {
        id: "adm",
        term_en: "Architecture Development Method (ADM)",
        term_zh: "架构开发方法 (ADM)",
        def_en: "The core of TOGAF. A step-by-step method for developing and managing the lifecycle of an enterprise architecture.",
        def_zh: "TOGAF 的核心。一种用于开发和管理企业架构生命周期的逐步方法。",
    },
    GlossaryEntry {
        id: "abb",
        term_en: "Architecture Building Block (ABB)",
        term_zh: "架构构建块 (ABB)",
        def_en: "A constituent of the architecture model that describes a single aspect of the overall architecture.",
        def_zh: "架构模型的组成部分，描述整体架构的单一特定方面（例如功能需求）。",
    },
    GlossaryEntry {
        id: "sbb",
        term_en: "Solution Building Block (SBB)",
        term_zh: "解决方案构建块 (SBB)",
        def_en: "A candidate solution which conforms to an Architecture Building Block (ABB). Represents a real product or component.",
        def_zh: "符合架构构建块 (ABB) 的候选解决方案。代表实际的产品或组件（如特定品牌的服务器）。",
    },
    GlossaryEntry {
        id: "artifact",
        term_en: "Artifact",
        term_zh: "制品 (Artifact)",
        def_en: "An architectural work product that describes an aspect of the architecture, such as a catalog, matrix, or diagram.",
        def_zh: "描述架构某一方面的工作产品，例如目录、矩阵或图形。",
    },
    GlossaryEntry {
        id: "deliverable",
        term_en: "Deliverable",
        term_zh: "交付物 (Deliverable)",
        def_en: "A work product that is contractually specified and then formally reviewed, agreed, and signed off by the stakeholders.",
        def_zh: "合同中规定的工作产品，需要利益相关者正式审查、同意并签署（如架构定义文档）。",
    },
    GlossaryEntry {
        id: "stakeholder",
        term_en: "Stakeholder",
        term_zh: "利益相关者",
        def_en: "An individual, team, or organization with interests in, or concerns relative to, the outcome of the architecture.",
        def_zh: "对架构结果有利益关系或关注点的个人、团队或组织。",
    },
    GlossaryEntry {
        id: "view",
        term_en: "View",
        term_zh: "视图",
        def_en: "The representation of a related set of concerns. A view is what you see (or read).",
        def_zh: "一组相关关注点的表示。视图是你看到（或读到）的内容。",
    },
    GlossaryEntry {
        id: "viewpoint",
        term_en: "Viewpoint",
        term_zh: "视点",
        def_en: "A definition of the perspective from which a view is taken. A viewpoint is where you are looking from.",
        def_zh: "对视图视角的定义。视点是你观察的角度（如“安全视点”定义了如何构建安全视图）。",
    },
    GlossaryEntry {
        id: "enterprise_continuum",
        term_en: "Enterprise Continuum",
        term_zh: "企业连续体",
        def_en: "A view of the Architecture Repository that provides a method for classifying architecture and solution artifacts.",
        def_zh: "架构存储库的一个视图，提供了一种对架构和解决方案制品进行分类的方法（从通用到特定）。",
    },
    GlossaryEntry {
        id: "gap_analysis",
        term_en: "Gap Analysis",
        term_zh: "差距分析",
        def_en: "The technique used to compare the Baseline Architecture and the Target Architecture to identify what needs to change.",
        def_zh: "用于比较基线架构和目标架构，以识别需要变更内容的技术。",
    },
    GlossaryEntry {
        id: "capability",
        term_en: "Capability",
        term_zh: "能力",
        def_en: "An ability that an organization, person, or system possesses. Capabilities are typically expressed in general and high-level terms.",
        def_zh: "组织、个人或系统拥有的能力。通常以通用和高层次的术语表达（如“客户管理能力”）。",
    },
    GlossaryEntry {
        id: "governance",
        term_en: "Architecture Governance",
        term_zh: "架构治理",
        def_en: "The practice and orientation by which enterprise architectures and other architectures are managed and controlled at an enterprise-wide level.",
        def_zh: "在企业范围内管理和控制企业架构及其他架构的实践和导向。",
    },
    GlossaryEntry {
        id: "metamodel",
        term_en: "Content Metamodel",
        term_zh: "内容元模型",
        def_en: "A model that describes how the different parts of an architecture fit together. It provides a standard definition for the content of the architecture.",
        def_zh: "描述架构不同部分如何组合在一起的模型。它为架构内容提供了标准定义。",
    },
    GlossaryEntry {
        id: "repository",
        term_en: "Architecture Repository",
        term_zh: "架构存储库",
        def_en: "A logical information model for the holding of all architecture-related output.",
        def_zh: "用于保存所有架构相关输出的逻辑信息模型。",
    },
    GlossaryEntry {
        id: "trm",
        term_en: "Technical Reference Model (TRM)",
        term_zh: "技术参考模型 (TRM)",
        def_en: "A foundation architecture providing a generic taxonomy of technology services and platforms.",
        def_zh: "一种基础架构，提供了技术服务和平台的通用分类法。",
    },
    GlossaryEntry {
        id: "arch_framework",
        term_en: "Architecture Framework",
        term_zh: "架构框架",
        def_en: "A conceptual structure used to develop, organize, and present architectures.",
        def_zh: "用于开发、组织和展示架构的概念结构。",
    },
    GlossaryEntry {
        id: "baseline_arch",
        term_en: "Baseline Architecture",
        term_zh: "基线架构",
        def_en: "The existing architecture state before entering a cycle of architecture review and redesign.",
        def_zh: "在进入架构审查和重新设计周期之前的现有架构状态。",
    },
    GlossaryEntry {
        id: "target_arch",
        term_en: "Target Architecture",
        term_zh: "目标架构",
        def_en: "The description of a future state of the architecture being developed.",
        def_zh: "正在开发的架构未来状态的描述。",
    },
    GlossaryEntry {
        id: "transition_arch",
        term_en: "Transition Architecture",
        term_zh: "过渡架构",
        def_en: "A formal description of a state of the architecture at an architecturally significant point in time between the Baseline and Target Architectures.",
        def_zh: "在基线架构和目标架构之间具有架构意义的时间点上的架构状态的正式描述。",
    },
    GlossaryEntry {
        id: "arch_principles",
        term_en: "Architecture Principles",
        term_zh: "架构原则",
        def_en: "A qualitative statement of intent that should be met by the architecture. Has a name, statement, rationale, and implications.",
        def_zh: "架构应满足的定性意图陈述。包含名称、陈述、理由和含义。",
    },
    GlossaryEntry {
        id: "req_arch_work",
        term_en: "Request for Architecture Work",
        term_zh: "架构工作请求",
        def_en: "A document sent from the sponsoring organization to the architecture organization to trigger the start of an architectural development cycle.",
        def_zh: "从发起组织发送给架构组织以触发架构开发周期开始的文档。",
    },
    GlossaryEntry {
        id: "stmt_arch_work",
        term_en: "Statement of Architecture Work",
        term_zh: "架构工作说明书",
        def_en: "A document that defines the scope and approach that will be used to complete an architecture project.",
        def_zh: "定义完成架构项目将使用的范围和方法的文档。",
    },
    GlossaryEntry {
        id: "arch_def_doc",
        term_en: "Architecture Definition Document",
        term_zh: "架构定义文档",
        def_en: "The deliverable container for the core architectural artifacts created during a project.",
        def_zh: "项目期间创建的核心架构制品的交付物容器。",
    },
    GlossaryEntry {
        id: "arch_req_spec",
        term_en: "Architecture Requirements Specification",
        term_zh: "架构需求规格说明书",
        def_en: "A set of quantitative statements that outline what an implementation project must do to comply with the architecture.",
        def_zh: "一组定量陈述，概述实施项目必须做什么才能符合架构。",
    },
    GlossaryEntry {
        id: "arch_roadmap",
        term_en: "Architecture Roadmap",
        term_zh: "架构路线图",
        def_en: "A list of individual work packages that will realize the Target Architecture and lays them out on a timeline.",
        def_zh: "将实现目标架构的各个工作包及其在时间轴上的排列列表。",
    },
    GlossaryEntry {
        id: "biz_arch",
        term_en: "Business Architecture",
        term_zh: "业务架构",
        def_en: "A representation of holistic, multi-dimensional business views of: capabilities, end-to-end value delivery, information, and organizational structure.",
        def_zh: "对能力、端到端价值交付、信息和组织结构的整体、多维业务视图的表示。",
    },
    GlossaryEntry {
        id: "data_arch",
        term_en: "Data Architecture",
        term_zh: "数据架构",
        def_en: "A description of the structure and interaction of the enterprise's major types and sources of data, logical data assets, physical data assets, and data management resources.",
        def_zh: "对企业主要数据类型和来源、逻辑数据资产、物理数据资产和数据管理资源的结构和交互的描述。",
    },
    GlossaryEntry {
        id: "app_arch",
        term_en: "Application Architecture",
        term_zh: "应用架构",
        def_en: "A description of the structure and interaction of the applications as groups of capabilities that provide key business functions and manage the data assets.",
        def_zh: "对作为提供关键业务功能和管理数据资产的能力组的应用程序的结构和交互的描述。",
    },
    GlossaryEntry {
        id: "tech_arch",
        term_en: "Technology Architecture",
        term_zh: "技术架构",
        def_en: "A description of the structure and interaction of the platform services, and logical and physical technology components.",
        def_zh: "对平台服务以及逻辑和物理技术组件的结构和交互的描述。",
    },
    GlossaryEntry {
        id: "foundation_arch",
        term_en: "Foundation Architecture",
        term_zh: "基础架构",
        def_en: "An architecture of building blocks and corresponding standards that supports all the Common Systems Architectures.",
        def_zh: "支持所有通用系统架构的构建块和相应标准的架构。",
    },
    GlossaryEntry {
        id: "common_sys_arch",
        term_en: "Common Systems Architecture",
        term_zh: "通用系统架构",
        def_en: "An architecture that supports the Industry Architectures and Organization-Specific Architectures.",
        def_zh: "支持行业架构和特定组织架构的架构。",
    },
    GlossaryEntry {
        id: "industry_arch",
        term_en: "Industry Architecture",
        term_zh: "行业架构",
        def_en: "An architecture that supports the Organization-Specific Architectures for a specific industry.",
        def_zh: "支持特定行业特定组织架构的架构。",
    },
    GlossaryEntry {
        id: "org_specific_arch",
        term_en: "Organization-Specific Architecture",
        term_zh: "特定组织架构",
        def_en: "An architecture that supports the specific needs of a particular enterprise.",
        def_zh: "支持特定企业特定需求的架构。",
    },
    GlossaryEntry {
        id: "arch_contract",
        term_en: "Architecture Contract",
        term_zh: "架构合同",
        def_en: "A joint agreement between development partners and sponsors on the deliverables, quality, and fitness-for-purpose of an architecture.",
        def_zh: "开发合作伙伴和发起人之间关于架构交付物、质量和适用性的联合协议。",
    },
    GlossaryEntry {
        id: "compliance_assessment",
        term_en: "Compliance Assessment",
        term_zh: "合规性评估",
        def_en: "A review of an architecture project or implementation project against the architectural standards and guidelines.",
        def_zh: "根据架构标准和指南对架构项目或实施项目进行的审查。",
    },
    GlossaryEntry {
        id: "impact_analysis",
        term_en: "Impact Analysis",
        term_zh: "影响分析",
        def_en: "The assessment of the effects of a change to a specific component or requirement on other components or requirements.",
        def_zh: "评估特定组件或需求的变更对其他组件或需求的影响。",
    },
    GlossaryEntry {
        id: "risk_management",
        term_en: "Risk Management",
        term_zh: "风险管理",
        def_en: "The identification, assessment, and prioritization of risks followed by coordinated application of resources to minimize, monitor, and control the probability and/or impact of unfortunate events.",
        def_zh: "对风险的识别、评估和优先级排序，随后协调应用资源以最小化、监控和控制不幸事件的概率和/或影响。",
    },
    GlossaryEntry {
        id: "sla",
        term_en: "Service Level Agreement (SLA)",
        term_zh: "服务级别协议 (SLA)",
        def_en: "A contract between a service provider and a customer that documents the services and performance standards.",
        def_zh: "服务提供商与客户之间的合同，记录了服务和性能标准。",
    },
    GlossaryEntry {
        id: "bif",
        term_en: "Boundaryless Information Flow",
        term_zh: "无边界信息流",
        def_en: "A trademark of The Open Group. Access to integrated information to support business process improvements.",
        def_zh: "The Open Group 的商标。访问集成信息以支持业务流程改进。",
    },
    GlossaryEntry {
        id: "iii_rm",
        term_en: "Integrated Information Infrastructure Reference Model (III-RM)",
        term_zh: "集成信息基础设施参考模型",
        def_en: "A subset of the TOGAF TRM, focusing on the application software space to support Boundaryless Information Flow.",
        def_zh: "TOGAF TRM 的子集，侧重于支持无边界信息流的应用软件空间。",
    },
    GlossaryEntry {
        id: "concerns",
        term_en: "Concerns",
        term_zh: "关注点",
        def_en: "The key interests that are crucially important to the stakeholders in the system, and determine the acceptability of the system.",
        def_zh: "对系统中利益相关者至关重要的关键利益，决定了系统的可接受性。",
    },
    GlossaryEntry {
        id: "apm",
        term_en: "Application Portfolio Management",
        term_zh: "应用组合管理",
        def_en: "The discipline of managing the application portfolio as an asset to ensure it delivers value to the business.",
        def_zh: "将应用组合作为资产进行管理的学科，以确保其为业务交付价值。",
    },
    GlossaryEntry {
        id: "cbp",
        term_en: "Capability-Based Planning",
        term_zh: "基于能力的规划",
        def_en: "A business planning paradigm that focuses on the planning, engineering, and delivery of strategic business capabilities.",
        def_zh: "一种专注于战略业务能力的规划、工程和交付的业务规划范式。",
    },
    GlossaryEntry {
        id: "interop",
        term_en: "Interoperability",
        term_zh: "互操作性",
        def_en: "The ability of two or more systems or components to exchange information and to use the information that has been exchanged.",
        def_zh: "两个或多个系统或组件交换信息并使用已交换信息的能力。",
    },
    GlossaryEntry {
        id: "sol_concept_diag",
        term_en: "Solution Concept Diagram",
        term_zh: "解决方案概念图",
        def_en: "A high-level representation of the solution involved in an architecture project.",
        def_zh: "架构项目中涉及的解决方案的高层表示。",
    },
    GlossaryEntry {
        id: "value_chain",
        term_en: "Value Chain Diagram",
        term_zh: "价值链图",
        def_en: "A diagram that shows the distinct activities that a firm performs to create value for customers.",
        def_zh: "显示企业为客户创造价值所执行的不同活动的图表。",
    },
    GlossaryEntry {
        id: "stakeholder_map",
        term_en: "Stakeholder Map",
        term_zh: "利益相关者图",
        def_en: "A matrix or diagram that identifies stakeholders, their concerns, and their influence on the project.",
        def_zh: "识别利益相关者、他们的关注点及其对项目影响的矩阵或图表。",
    },
    GlossaryEntry {
        id: "comm_plan",
        term_en: "Communications Plan",
        term_zh: "沟通计划",
        def_en: "A document that outlines how information will be shared with stakeholders throughout the architecture project.",
        def_zh: "概述如何在整个架构项目中与利益相关者共享信息的文档。",
    },
    GlossaryEntry {
        id: "biz_scenario",
        term_en: "Business Scenarios",
        term_zh: "业务场景",
        def_en: "A technique used to help identify and understand the business requirements that an architecture must address.",
        def_zh: "用于帮助识别和理解架构必须解决的业务需求的技术。",
    },
    GlossaryEntry {
        id: "req_repo",
        term_en: "Requirements Repository",
        term_zh: "需求库",
        def_en: "A system or database where requirements are stored and managed throughout the ADM cycle.",
        def_zh: "在整个 ADM 周期中存储和管理需求的系统或数据库。",
    },
];
